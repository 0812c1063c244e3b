// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use time::OffsetDateTime;

use crate::digest::{integrity_digest, DIGEST_LEN};
use crate::{
    modified_utf8, Certificate, KeyStore, KeyStoreError, TrustedCertificateEntry, MAGIC,
    PRIVATE_KEY_TAG, TRUSTED_CERTIFICATE_TAG, VERSION_1, VERSION_2, X509_CERTIFICATE_TYPE,
};

pub(crate) fn decode_keystore(
    bytes: &[u8],
    password: Option<&str>,
) -> Result<KeyStore, KeyStoreError> {
    let mut input = Input { data: bytes, pos: 0 };

    let magic = input.u32()?;
    if magic != MAGIC {
        return Err(KeyStoreError::InvalidMagic(magic));
    }
    let version = input.u32()?;
    if version != VERSION_1 && version != VERSION_2 {
        return Err(KeyStoreError::UnsupportedVersion(version));
    }

    let count = input.u32()?;
    let mut ks = KeyStore::new();
    for _ in 0..count {
        let tag = input.u32()?;
        let alias = input.utf()?;
        match tag {
            TRUSTED_CERTIFICATE_TAG => {}
            PRIVATE_KEY_TAG => return Err(KeyStoreError::PrivateKeyEntry(alias)),
            other => return Err(KeyStoreError::UnknownTag(other)),
        }
        let millis = input.i64()?;
        let creation_time =
            OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).map_err(
                |_| KeyStoreError::UnrepresentableCreationTime(format!("{millis}ms")),
            )?;
        let cert_type = if version == VERSION_1 {
            X509_CERTIFICATE_TYPE.to_owned()
        } else {
            input.utf()?
        };
        let len = input.u32()? as usize;
        let content = input.bytes(len)?.to_vec();

        ks.set_trusted_certificate_entry(
            alias,
            TrustedCertificateEntry {
                creation_time,
                certificate: Certificate { cert_type, content },
            },
        )?;
    }

    let body_len = input.pos;
    let digest = input.bytes(DIGEST_LEN)?;
    if input.pos != bytes.len() {
        return Err(KeyStoreError::TrailingData);
    }
    if let Some(password) = password {
        if integrity_digest(password, &bytes[..body_len]).as_slice() != digest {
            return Err(KeyStoreError::IntegrityCheckFailed);
        }
    }
    Ok(ks)
}

struct Input<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Input<'a> {
    fn bytes(&mut self, n: usize) -> Result<&'a [u8], KeyStoreError> {
        let end = self.pos.checked_add(n).ok_or(KeyStoreError::Truncated)?;
        let slice = self
            .data
            .get(self.pos..end)
            .ok_or(KeyStoreError::Truncated)?;
        self.pos = end;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], KeyStoreError> {
        let mut out = [0_u8; N];
        out.copy_from_slice(self.bytes(N)?);
        Ok(out)
    }

    fn u32(&mut self) -> Result<u32, KeyStoreError> {
        self.array().map(u32::from_be_bytes)
    }

    fn i64(&mut self) -> Result<i64, KeyStoreError> {
        self.array().map(i64::from_be_bytes)
    }

    fn utf(&mut self) -> Result<String, KeyStoreError> {
        let len = self.array().map(u16::from_be_bytes)?;
        modified_utf8::decode(self.bytes(len.into())?)
    }
}
