// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::digest::integrity_digest;
use crate::{
    modified_utf8, KeyStore, KeyStoreError, MAGIC, TRUSTED_CERTIFICATE_TAG, VERSION_2,
};

pub(crate) fn encode_keystore(ks: &KeyStore, password: &str) -> Result<Vec<u8>, KeyStoreError> {
    let mut out = Vec::new();
    out.extend_from_slice(&MAGIC.to_be_bytes());
    out.extend_from_slice(&VERSION_2.to_be_bytes());
    let count = u32::try_from(ks.len())
        .map_err(|_| KeyStoreError::TooLong("entry count", ks.len(), u32::MAX as usize))?;
    out.extend_from_slice(&count.to_be_bytes());

    for (alias, entry) in ks.entries() {
        out.extend_from_slice(&TRUSTED_CERTIFICATE_TAG.to_be_bytes());
        write_utf(&mut out, "alias", alias)?;

        let millis = i64::try_from(entry.creation_time.unix_timestamp_nanos() / 1_000_000)
            .map_err(|_| {
                KeyStoreError::UnrepresentableCreationTime(entry.creation_time.to_string())
            })?;
        out.extend_from_slice(&millis.to_be_bytes());

        write_utf(&mut out, "certificate type", &entry.certificate.cert_type)?;
        let content = &entry.certificate.content;
        let len = u32::try_from(content.len()).map_err(|_| {
            KeyStoreError::TooLong("certificate", content.len(), u32::MAX as usize)
        })?;
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(content);
    }

    let digest = integrity_digest(password, &out);
    out.extend_from_slice(&digest);
    Ok(out)
}

fn write_utf(out: &mut Vec<u8>, what: &'static str, s: &str) -> Result<(), KeyStoreError> {
    let encoded = modified_utf8::encode(s);
    let len = u16::try_from(encoded.len())
        .map_err(|_| KeyStoreError::TooLong(what, encoded.len(), u16::MAX as usize))?;
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(&encoded);
    Ok(())
}
