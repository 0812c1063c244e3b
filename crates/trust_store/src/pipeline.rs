// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::{debug, info};

use crate::{
    assemble, decode_chain, serialize, Artifact, Clock, Diagnostics, SystemClock,
    TrustStoreConfig, TrustStoreError,
};

/// Outcome of one generation. `artifact` is `None` exactly when a fatal error was
/// recorded; advisory errors may accompany a successful artifact.
#[derive(Debug)]
pub struct Generation {
    pub artifact: Option<Artifact>,
    pub diagnostics: Diagnostics,
}

impl Generation {
    fn failed(diagnostics: Diagnostics) -> Self {
        Self {
            artifact: None,
            diagnostics,
        }
    }
}

/// Generates a trust store, stamping entries with the current time.
pub fn generate(config: &TrustStoreConfig) -> Generation {
    generate_with_clock(config, &SystemClock)
}

pub fn generate_with_clock(config: &TrustStoreConfig, clock: &dyn Clock) -> Generation {
    let mut diagnostics = Diagnostics::new();

    if config.certificates.is_empty() {
        diagnostics.push(TrustStoreError::NoCertificates);
        return Generation::failed(diagnostics);
    }

    let chains: Vec<_> = config
        .certificates
        .iter()
        .enumerate()
        .map(|(index, chain)| decode_chain(index, chain, config.strictness, &mut diagnostics))
        .collect();
    debug!(chains = chains.len(), "Decoded certificate chains");

    let keystore = assemble(chains, clock, &mut diagnostics);

    let bytes = match serialize(&keystore, &config.password) {
        Ok(bytes) => bytes,
        Err(e) => {
            diagnostics.push(e);
            return Generation::failed(diagnostics);
        }
    };

    let artifact = Artifact::from_bytes(bytes);
    info!(
        entries = keystore.len(),
        bytes = artifact.bytes().len(),
        id = artifact.id(),
        errors = diagnostics.len(),
        "Generated trust store"
    );
    Generation {
        artifact: Some(artifact),
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{certificate_chain, certificate_pem, fixed_clock};
    use crate::Strictness;

    #[test]
    fn no_certificates_is_fatal_and_produces_nothing() {
        let generation = generate(&TrustStoreConfig::new(vec![]));
        assert!(generation.artifact.is_none());
        let errors = generation.diagnostics.into_vec();
        assert!(matches!(errors.as_slice(), [TrustStoreError::NoCertificates]));
        assert!(errors[0].is_fatal());
    }

    #[test]
    fn one_entry_per_chain() {
        let config = TrustStoreConfig::new(vec![
            certificate_pem(b"a"),
            certificate_chain::<&[u8]>(&[b"b1", b"b2"]),
        ])
        .with_password("pw");
        let generation = generate_with_clock(&config, &fixed_clock());

        assert!(generation.diagnostics.is_empty());
        let ks = generation
            .artifact
            .unwrap()
            .load_keystore(Some("pw"))
            .unwrap();
        assert_eq!(ks.len(), 2);
        assert_eq!(ks.trusted_certificate_entry("1").unwrap().certificate.content, b"b1b2");
    }

    #[test]
    fn advisory_errors_accompany_the_artifact() {
        let config = TrustStoreConfig::new(vec![
            format!("{}junk", certificate_pem(b"a")),
            certificate_pem(b"b"),
        ]);
        let generation = generate_with_clock(&config, &fixed_clock());

        assert!(!generation.diagnostics.has_fatal());
        assert_eq!(generation.diagnostics.len(), 1);
        assert_eq!(generation.diagnostics.iter().next().unwrap().chain(), Some(0));
        let ks = generation.artifact.unwrap().load_keystore(None).unwrap();
        assert_eq!(ks.trusted_certificate_entry("0").unwrap().certificate.content, b"a");
        assert_eq!(ks.trusted_certificate_entry("1").unwrap().certificate.content, b"b");
    }

    #[test]
    fn fixed_clock_makes_generation_reproducible() {
        let config = TrustStoreConfig::new(vec![certificate_pem(b"a")]).with_password("pw");
        let first = generate_with_clock(&config, &fixed_clock()).artifact.unwrap();
        let second = generate_with_clock(&config, &fixed_clock()).artifact.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn strictness_is_taken_from_config() {
        let chain = format!(
            "{}{}",
            certificate_pem(b"cert"),
            crate::test_helpers::pem_block("PRIVATE KEY", b"key")
        );
        for (strictness, expected) in [
            (Strictness::Lenient, b"certkey".as_slice()),
            (Strictness::Strict, b"cert".as_slice()),
        ] {
            let config = TrustStoreConfig::new(vec![chain.clone()]).with_strictness(strictness);
            let generation = generate_with_clock(&config, &fixed_clock());
            assert_eq!(generation.diagnostics.len(), 1);
            let ks = generation.artifact.unwrap().load_keystore(None).unwrap();
            assert_eq!(ks.trusted_certificate_entry("0").unwrap().certificate.content, expected);
        }
    }
}
