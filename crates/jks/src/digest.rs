// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use sha1::{Digest, Sha1};

/// Fixed string mixed into the integrity digest by every JKS implementation.
const WHITENER: &[u8] = b"Mighty Aphrodite";

pub(crate) const DIGEST_LEN: usize = 20;

/// SHA-1 over `UTF-16BE(password) || WHITENER || body`.
pub(crate) fn integrity_digest(password: &str, body: &[u8]) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha1::new();
    for unit in password.encode_utf16() {
        hasher.update(unit.to_be_bytes());
    }
    hasher.update(WHITENER);
    hasher.update(body);
    hasher.finalize().into()
}
