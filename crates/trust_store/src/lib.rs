// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds Java trust stores (JKS) out of PEM encoded certificate chains.
//!
//! Each chain in a [`TrustStoreConfig`] becomes one trusted certificate entry, named
//! after its position in the list (`"0"`, `"1"`, ...), whose content is the
//! concatenated DER of every PEM block in the chain. The serialized store is handed
//! back as an [`Artifact`]: base64 text plus a hex SHA-1 of that text, used as the
//! artifact's identifier.
//!
//! Problems are accumulated rather than returned early; see [`Diagnostics`].

mod artifact;
mod assembler;
mod clock;
mod config;
mod error;
mod pem_chain;
mod pipeline;
mod serializer;

pub mod resource;
pub mod test_helpers;

pub use artifact::{artifact_id, decode_jks, Artifact};
pub use assembler::{assemble, insert_chain};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, Strictness, TrustStoreConfig};
pub use error::{Diagnostics, TrustStoreError};
pub use pem_chain::{
    decode_chain, DecodedChain, ACCEPTED_TAGS, CERTIFICATE_TAG, EC_PRIVATE_KEY_TAG,
};
pub use pipeline::{generate, generate_with_clock, Generation};
pub use serializer::{serialize, serialize_into};

pub use jks;
