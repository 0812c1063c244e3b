// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::{self, Display};

use thiserror::Error;
use tracing::debug;

use crate::resource::PersistError;

#[derive(Error, Debug)]
pub enum TrustStoreError {
    #[error("no certificates supplied")]
    NoCertificates,
    #[error("chain {chain}, certificate {block}: failed to load PEM")]
    UnparsablePem { chain: usize, block: usize },
    #[error("chain {chain}, certificate {block}: failed to load PEM: {source}")]
    MalformedPem {
        chain: usize,
        block: usize,
        source: pem::PemError,
    },
    #[error("chain {chain}, certificate {block}: expected CERTIFICATE but found {found:?}")]
    UnexpectedBlockType {
        chain: usize,
        block: usize,
        found: String,
    },
    #[error("chain {chain}: {source}")]
    Insertion {
        chain: usize,
        source: jks::KeyStoreError,
    },
    #[error("failed to generate JKS: {0}")]
    Store(jks::KeyStoreError),
    #[error("failed to flush JKS: {0}")]
    Flush(std::io::Error),
    #[error("failed to save JKS: {0}")]
    PersistJks(PersistError),
    #[error("{0} cannot be changed in place; the trust store must be recreated")]
    ImmutableInput(&'static str),
}

impl TrustStoreError {
    /// Fatal errors mean no artifact was (or can be) produced. Everything else is
    /// advisory: generation carried on past it.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::NoCertificates | Self::Store(_) | Self::Flush(_) | Self::ImmutableInput(_)
        )
    }

    /// Index of the chain the error refers to, if any.
    pub fn chain(&self) -> Option<usize> {
        match self {
            Self::UnparsablePem { chain, .. }
            | Self::MalformedPem { chain, .. }
            | Self::UnexpectedBlockType { chain, .. }
            | Self::Insertion { chain, .. } => Some(*chain),
            _ => None,
        }
    }
}

/// Ordered list of every error raised during one invocation.
#[derive(Debug, Default)]
pub struct Diagnostics(Vec<TrustStoreError>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: TrustStoreError) {
        debug!("{error}");
        self.0.push(error);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn has_fatal(&self) -> bool {
        self.0.iter().any(TrustStoreError::is_fatal)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrustStoreError> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<TrustStoreError> {
        self.0
    }
}

impl From<TrustStoreError> for Diagnostics {
    fn from(error: TrustStoreError) -> Self {
        let mut diagnostics = Self::new();
        diagnostics.push(error);
        diagnostics
    }
}

impl IntoIterator for Diagnostics {
    type Item = TrustStoreError;
    type IntoIter = std::vec::IntoIter<TrustStoreError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a TrustStoreError;
    type IntoIter = std::slice::Iter<'a, TrustStoreError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_chain_and_block_positions() {
        let error = TrustStoreError::UnexpectedBlockType {
            chain: 2,
            block: 1,
            found: "RSA PRIVATE KEY".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "chain 2, certificate 1: expected CERTIFICATE but found \"RSA PRIVATE KEY\""
        );
        assert_eq!(error.chain(), Some(2));

        let error = TrustStoreError::UnparsablePem { chain: 0, block: 3 };
        assert_eq!(error.to_string(), "chain 0, certificate 3: failed to load PEM");
    }

    #[test]
    fn only_pipeline_aborting_errors_are_fatal() {
        assert!(TrustStoreError::NoCertificates.is_fatal());
        assert!(TrustStoreError::Flush(std::io::ErrorKind::BrokenPipe.into()).is_fatal());
        assert!(!TrustStoreError::UnparsablePem { chain: 0, block: 0 }.is_fatal());
        assert!(!TrustStoreError::PersistJks(PersistError("read only".into())).is_fatal());
    }

    #[test]
    fn diagnostics_keep_insertion_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(TrustStoreError::UnparsablePem { chain: 1, block: 0 });
        diagnostics.push(TrustStoreError::UnparsablePem { chain: 0, block: 4 });
        assert!(!diagnostics.has_fatal());
        assert_eq!(
            diagnostics.to_string(),
            "chain 1, certificate 0: failed to load PEM\nchain 0, certificate 4: failed to load PEM"
        );

        diagnostics.extend(TrustStoreError::NoCertificates.into());
        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.has_fatal());
    }
}
