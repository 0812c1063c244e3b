// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builders for PEM input. Payloads are arbitrary bytes: nothing in this crate
//! looks inside the DER.

use pem::{EncodeConfig, LineEnding, Pem};
use time::{Duration, OffsetDateTime};

use crate::{FixedClock, CERTIFICATE_TAG};

pub fn pem_block(tag: &str, contents: &[u8]) -> String {
    let config = EncodeConfig::new().set_line_ending(LineEnding::LF);
    pem::encode_config(&Pem::new(tag, contents.to_vec()), config)
}

pub fn certificate_pem(contents: &[u8]) -> String {
    pem_block(CERTIFICATE_TAG, contents)
}

/// One chain made of a CERTIFICATE block per payload, in order.
pub fn certificate_chain<T: AsRef<[u8]>>(payloads: &[T]) -> String {
    payloads
        .iter()
        .map(|p| certificate_pem(p.as_ref()))
        .collect()
}

/// 2023-11-14T22:13:20.123Z
pub fn fixed_clock() -> FixedClock {
    FixedClock(OffsetDateTime::UNIX_EPOCH + Duration::milliseconds(1_700_000_000_123))
}
