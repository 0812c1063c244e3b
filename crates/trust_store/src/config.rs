// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the PEM decoder treats blocks whose type is not accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Report the block and still include its payload in the chain.
    #[default]
    Lenient,
    /// Report the block and leave its payload out of the chain.
    Strict,
}

/// Input of one trust store generation.
///
/// `certificates` holds one PEM document per chain; `password` protects the
/// integrity of the generated store and defaults to the empty string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustStoreConfig {
    pub certificates: Vec<String>,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub strictness: Strictness,
}

impl TrustStoreConfig {
    pub fn new(certificates: Vec<String>) -> Self {
        Self {
            certificates,
            password: String::new(),
            strictness: Strictness::default(),
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_owned(), e))?;
        Self::from_toml_str(&contents)
    }
}

impl fmt::Debug for TrustStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrustStoreConfig")
            .field("certificates", &self.certificates)
            .field("password", &"<redacted>")
            .field("strictness", &self.strictness)
            .finish()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't read config {0:?}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error("couldn't parse config: {0}")]
    Parse(toml::de::Error),
}
