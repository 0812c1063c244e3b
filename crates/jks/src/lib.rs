// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reader and writer for the Java KeyStore (JKS) container format, limited to
//! trusted certificate entries.
//!
//! A [`KeyStore`] is an ordered mapping of alias to [`TrustedCertificateEntry`].
//! [`KeyStore::store`] writes the version 2 layout, terminated by the keyed SHA-1
//! integrity digest that `keytool` checks; [`KeyStore::load`] parses version 1
//! and 2 stores back.
//!
//! ```rust
//! use jks::{Certificate, KeyStore, TrustedCertificateEntry};
//! use time::OffsetDateTime;
//!
//! let mut ks = KeyStore::new();
//! ks.set_trusted_certificate_entry(
//!     "root",
//!     TrustedCertificateEntry {
//!         creation_time: OffsetDateTime::UNIX_EPOCH,
//!         certificate: Certificate::x509(vec![0x30, 0x00]),
//!     },
//! )
//! .unwrap();
//!
//! let mut bytes = Vec::new();
//! ks.store(&mut bytes, "changeit").unwrap();
//! let loaded = KeyStore::load(bytes.as_slice(), Some("changeit")).unwrap();
//! assert_eq!(loaded, ks);
//! ```

mod decode;
mod digest;
mod encode;
mod error;
mod keystore;
mod modified_utf8;

pub use error::KeyStoreError;
pub use keystore::{Certificate, KeyStore, TrustedCertificateEntry, X509_CERTIFICATE_TYPE};

/// Leading magic number of every JKS file.
pub const MAGIC: u32 = 0xFEED_FEED;
/// Format version written by [`KeyStore::store`].
pub const VERSION_2: u32 = 2;
/// Oldest format version, which omits the certificate type.
pub const VERSION_1: u32 = 1;

pub(crate) const PRIVATE_KEY_TAG: u32 = 1;
pub(crate) const TRUSTED_CERTIFICATE_TAG: u32 = 2;
