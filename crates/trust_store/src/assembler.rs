// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use jks::{Certificate, KeyStore, TrustedCertificateEntry};
use tracing::debug;

use crate::{Clock, DecodedChain, Diagnostics, TrustStoreError};

/// Builds a keystore with one trusted certificate entry per decoded chain, named
/// after the chain's index.
pub fn assemble(
    chains: impl IntoIterator<Item = DecodedChain>,
    clock: &dyn Clock,
    diagnostics: &mut Diagnostics,
) -> KeyStore {
    let mut keystore = KeyStore::new();
    for chain in chains {
        insert_chain(&mut keystore, chain, clock, diagnostics);
    }
    keystore
}

/// Adds `chain` to `keystore`. A rejected insertion is recorded and otherwise ignored.
pub fn insert_chain(
    keystore: &mut KeyStore,
    chain: DecodedChain,
    clock: &dyn Clock,
    diagnostics: &mut Diagnostics,
) {
    let alias = chain.index.to_string();
    let bytes = chain.der.len();
    let entry = TrustedCertificateEntry {
        creation_time: clock.now(),
        certificate: Certificate::x509(chain.der),
    };
    match keystore.set_trusted_certificate_entry(&alias, entry) {
        Ok(()) => debug!(alias = alias.as_str(), bytes, "Added trusted certificate entry"),
        Err(source) => diagnostics.push(TrustStoreError::Insertion {
            chain: chain.index,
            source,
        }),
    }
}
