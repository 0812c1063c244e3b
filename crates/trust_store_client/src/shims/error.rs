// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::PathBuf;

use trust_store::ConfigError;

use crate::password_reader::PasswordReaderError;

#[derive(Debug, thiserror::Error)]
pub enum TrustStoreCliError {
    #[error("Unable to read certificate chain from {0:?}.")]
    CouldNotReadChain(PathBuf),
    #[error("Unable to write trust store to {0:?}.")]
    CouldNotWriteTrustStore(PathBuf),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    CouldNotReadPassword(#[from] PasswordReaderError),
    #[error("No trust store was generated.")]
    GenerationFailed,
    #[error(
        "Trust store was generated, but {0} problem(s) were reported and --deny-warnings was given."
    )]
    DeniedWarnings(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
