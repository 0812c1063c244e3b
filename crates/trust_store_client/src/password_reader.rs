// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

pub const ENTER_PASSWORD_PROMPT: &str = "Please enter the trust store password:";

pub const PASSWORD_ENV_VAR: &str = "JKS_TRUST_STORE_PASSWORD";

pub trait PasswordReader {
    fn read_password(&self) -> Result<String, PasswordReaderError>;
}

/// Prompts on the terminal without echoing.
pub struct PromptPasswordReader {
    prompt: String,
}

impl PromptPasswordReader {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl PasswordReader for PromptPasswordReader {
    fn read_password(&self) -> Result<String, PasswordReaderError> {
        rpassword::prompt_password(&self.prompt).map_err(|_| PasswordReaderError::PromptError)
    }
}

/// Reads the first line of a file. The line ending is not part of the password.
pub struct FilePasswordReader {
    pub path: PathBuf,
}

impl PasswordReader for FilePasswordReader {
    fn read_password(&self) -> Result<String, PasswordReaderError> {
        let contents = fs::read_to_string(&self.path)
            .map_err(|_| PasswordReaderError::CouldNotReadFile(self.path.clone()))?;
        Ok(contents.lines().next().unwrap_or_default().to_owned())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PasswordReaderError {
    #[error("Unable to read password from prompt.")]
    PromptError,
    #[error("Unable to read password from {0:?}.")]
    CouldNotReadFile(PathBuf),
}
