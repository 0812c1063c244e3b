// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyStoreError {
    #[error("alias must not be empty")]
    EmptyAlias,
    #[error("certificate type must not be empty")]
    EmptyCertificateType,
    #[error("an entry with alias {0:?} already exists")]
    DuplicateAlias(String),
    #[error("{0} is too long to encode: {1} bytes, maximum is {2}")]
    TooLong(&'static str, usize, usize),
    #[error("creation time {0} cannot be represented in milliseconds since the epoch")]
    UnrepresentableCreationTime(String),
    #[error("could not write keystore: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a keystore: magic number was {0:#010x}")]
    InvalidMagic(u32),
    #[error("unsupported keystore version {0}")]
    UnsupportedVersion(u32),
    #[error("entry {0:?} holds a private key, which is not supported")]
    PrivateKeyEntry(String),
    #[error("unknown entry tag {0}")]
    UnknownTag(u32),
    #[error("string is not valid modified UTF-8")]
    InvalidModifiedUtf8,
    #[error("keystore ended unexpectedly")]
    Truncated,
    #[error("unexpected data after the integrity digest")]
    TrailingData,
    #[error("keystore was tampered with, or password was incorrect")]
    IntegrityCheckFailed,
}
