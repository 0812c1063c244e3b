// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builds a JKS trust store out of PEM files or a TOML config

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::{crate_version, Parser};
use tracing::info;

use trust_store::{generate, Strictness, TrustStoreConfig};

use super::error::TrustStoreCliError;
use crate::logging::Verbosity;
use crate::password_reader::{
    FilePasswordReader, PasswordReader, PromptPasswordReader, ENTER_PASSWORD_PROMPT,
    PASSWORD_ENV_VAR,
};

#[derive(Debug, Parser)]
#[clap(
    name = "jks-create-trust-store",
    about = "Builds a JKS trust store from PEM encoded certificate chains",
    version = crate_version!()
)]
pub struct CreateTrustStoreOpts {
    #[clap(
        help = "PEM files to include, one certificate chain per file. Entries are named after their position: 0, 1, ...",
        required_unless_present = "config"
    )]
    pub chains: Vec<PathBuf>,

    #[clap(
        long,
        conflicts_with = "chains",
        help = "TOML file with `certificates` (list of PEM strings), and optionally `password` and `strictness`"
    )]
    pub config: Option<PathBuf>,

    #[clap(
        long,
        env = PASSWORD_ENV_VAR,
        hide_env_values = true,
        help = "Password protecting the trust store [default: empty]"
    )]
    pub password: Option<String>,

    #[clap(
        long,
        help = "File whose first line is the trust store password. Takes precedence over --prompt and --password"
    )]
    pub password_file: Option<PathBuf>,

    #[clap(long, help = "Prompt for the trust store password. Takes precedence over --password")]
    pub prompt: bool,

    #[clap(
        long,
        help = "Leave out the contents of PEM blocks that are neither CERTIFICATE nor EC PRIVATE KEY"
    )]
    pub strict: bool,

    #[clap(
        short,
        long,
        help = "Write the binary trust store to this path instead of printing it as base64"
    )]
    pub output: Option<PathBuf>,

    #[clap(long, help = "Fail if any problem was reported, even when a trust store was generated")]
    pub deny_warnings: bool,

    #[clap(flatten)]
    pub verbosity: Verbosity,
}

/// Writes the id (and the base64 store, without `--output`) to `stdout`, and every
/// reported problem to `stderr`.
pub fn main<W: Write, E: Write>(
    opts: &CreateTrustStoreOpts,
    stdout: &mut W,
    stderr: &mut E,
) -> Result<(), TrustStoreCliError> {
    let config = load_config(opts)?;
    let generation = generate(&config);

    for error in &generation.diagnostics {
        writeln!(stderr, "Error: {error}")?;
    }
    let artifact = generation
        .artifact
        .ok_or(TrustStoreCliError::GenerationFailed)?;

    match &opts.output {
        Some(path) => {
            fs::write(path, artifact.bytes())
                .map_err(|_| TrustStoreCliError::CouldNotWriteTrustStore(path.clone()))?;
            info!("Wrote trust store to {path:?}");
            writeln!(stdout, "id: {}", artifact.id())?;
        }
        None => {
            writeln!(stdout, "id: {}", artifact.id())?;
            writeln!(stdout, "jks: {}", artifact.jks())?;
        }
    }

    if opts.deny_warnings && !generation.diagnostics.is_empty() {
        return Err(TrustStoreCliError::DeniedWarnings(
            generation.diagnostics.len(),
        ));
    }
    Ok(())
}

fn load_config(opts: &CreateTrustStoreOpts) -> Result<TrustStoreConfig, TrustStoreCliError> {
    let mut config = match &opts.config {
        Some(path) => TrustStoreConfig::load(path)?,
        None => {
            let chains = opts
                .chains
                .iter()
                .map(|path| {
                    fs::read_to_string(path)
                        .map_err(|_| TrustStoreCliError::CouldNotReadChain(path.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            TrustStoreConfig::new(chains)
        }
    };

    if let Some(path) = &opts.password_file {
        config.password = FilePasswordReader { path: path.clone() }.read_password()?;
    } else if opts.prompt {
        config.password = PromptPasswordReader::new(ENTER_PASSWORD_PROMPT).read_password()?;
    } else if let Some(password) = &opts.password {
        config.password = password.clone();
    }

    if opts.strict {
        config.strictness = Strictness::Strict;
    }
    Ok(config)
}
