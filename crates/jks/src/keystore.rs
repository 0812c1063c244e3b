// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::{Read, Write};

use time::OffsetDateTime;
use tracing::debug;

use crate::{decode, encode, KeyStoreError};

/// Type tag of DER encoded X.509 certificates.
pub const X509_CERTIFICATE_TYPE: &str = "X.509";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub cert_type: String,
    pub content: Vec<u8>,
}

impl Certificate {
    pub fn x509(content: Vec<u8>) -> Self {
        Self {
            cert_type: X509_CERTIFICATE_TYPE.to_owned(),
            content,
        }
    }
}

/// A certificate trusted by whoever loads the keystore.
///
/// The creation time is part of the serialized form, at millisecond precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedCertificateEntry {
    pub creation_time: OffsetDateTime,
    pub certificate: Certificate,
}

/// In-memory keystore. Entries keep the order in which they were inserted, which is
/// also the order they are serialized in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStore {
    entries: Vec<(String, TrustedCertificateEntry)>,
}

impl KeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trusted certificate entry. Aliases are case-insensitive and stored
    /// lowercased, as Java does.
    pub fn set_trusted_certificate_entry(
        &mut self,
        alias: impl AsRef<str>,
        entry: TrustedCertificateEntry,
    ) -> Result<(), KeyStoreError> {
        let alias = alias.as_ref().to_lowercase();
        if alias.is_empty() {
            return Err(KeyStoreError::EmptyAlias);
        }
        if entry.certificate.cert_type.is_empty() {
            return Err(KeyStoreError::EmptyCertificateType);
        }
        if self.trusted_certificate_entry(&alias).is_some() {
            return Err(KeyStoreError::DuplicateAlias(alias));
        }
        self.entries.push((alias, entry));
        Ok(())
    }

    pub fn trusted_certificate_entry(&self, alias: &str) -> Option<&TrustedCertificateEntry> {
        let alias = alias.to_lowercase();
        self.entries
            .iter()
            .find(|(a, _)| *a == alias)
            .map(|(_, entry)| entry)
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(alias, _)| alias.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &TrustedCertificateEntry)> {
        self.entries.iter().map(|(alias, entry)| (alias.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the keystore, protecting its integrity with `password`.
    ///
    /// The whole store is written with `write_all`; flushing `writer` is left to the caller.
    pub fn store<W: Write>(&self, mut writer: W, password: &str) -> Result<(), KeyStoreError> {
        let bytes = encode::encode_keystore(self, password)?;
        debug!(
            entries = self.len(),
            bytes = bytes.len(),
            "Writing keystore"
        );
        writer.write_all(&bytes)?;
        Ok(())
    }

    /// Parses a keystore. The integrity digest is only verified when a password is given.
    pub fn load<R: Read>(mut reader: R, password: Option<&str>) -> Result<Self, KeyStoreError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        decode::decode_keystore(&bytes, password)
    }
}
