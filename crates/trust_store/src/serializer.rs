// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::{BufWriter, Write};

use jks::KeyStore;

use crate::TrustStoreError;

/// Serializes `keystore` into a fresh buffer.
pub fn serialize(keystore: &KeyStore, password: &str) -> Result<Vec<u8>, TrustStoreError> {
    let mut bytes = Vec::new();
    serialize_into(keystore, password, &mut bytes)?;
    Ok(bytes)
}

/// Serializes `keystore` through a buffered writer on top of `sink`. The output is
/// only complete once the buffer has been flushed, and a failed flush is reported
/// separately from a failed write.
pub fn serialize_into<W: Write>(
    keystore: &KeyStore,
    password: &str,
    sink: W,
) -> Result<(), TrustStoreError> {
    let mut writer = BufWriter::new(sink);
    keystore
        .store(&mut writer, password)
        .map_err(TrustStoreError::Store)?;
    writer.flush().map_err(TrustStoreError::Flush)
}
