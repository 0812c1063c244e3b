// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use base64::{engine::general_purpose::STANDARD, Engine};
use jks::{KeyStore, KeyStoreError};
use sha1::{Digest, Sha1};

/// A serialized trust store, in raw and base64 form, with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    bytes: Vec<u8>,
    jks: String,
    id: String,
}

impl Artifact {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        let jks = STANDARD.encode(&bytes);
        let id = artifact_id(&jks);
        Self { bytes, jks, id }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Standard, padded base64 of [`Self::bytes`].
    pub fn jks(&self) -> &str {
        &self.jks
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn decode_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        decode_jks(&self.jks)
    }

    pub fn load_keystore(&self, password: Option<&str>) -> Result<KeyStore, KeyStoreError> {
        KeyStore::load(self.bytes.as_slice(), password)
    }
}

/// Lowercase hex SHA-1 of the base64 text (not of the raw keystore bytes).
pub fn artifact_id(jks: &str) -> String {
    hex::encode(Sha1::digest(jks.as_bytes()))
}

pub fn decode_jks(jks: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(jks)
}
