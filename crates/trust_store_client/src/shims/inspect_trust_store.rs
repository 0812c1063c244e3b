// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lists the entries of a JKS trust store

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{crate_version, Parser};
use time::format_description::well_known::Rfc3339;

use trust_store::jks::KeyStore;
use trust_store::{artifact_id, decode_jks};

use crate::logging::Verbosity;
use crate::password_reader::PASSWORD_ENV_VAR;

#[derive(Debug, Parser)]
#[clap(
    name = "jks-inspect-trust-store",
    about = "Lists the entries of a JKS trust store",
    version = crate_version!()
)]
pub struct InspectTrustStoreOpts {
    #[clap(help = "Path of the trust store, or of a file holding its base64 text with --base64")]
    pub file: PathBuf,

    #[clap(long, help = "The file holds base64 text, as printed by jks-create-trust-store")]
    pub base64: bool,

    #[clap(
        long,
        env = PASSWORD_ENV_VAR,
        hide_env_values = true,
        help = "Verify the trust store's integrity with this password"
    )]
    pub password: Option<String>,

    #[clap(flatten)]
    pub verbosity: Verbosity,
}

pub fn main<W: Write>(opts: &InspectTrustStoreOpts, stdout: &mut W) -> anyhow::Result<()> {
    let display_text = run(opts)?;
    write!(stdout, "{display_text}")?;
    Ok(())
}

fn run(opts: &InspectTrustStoreOpts) -> anyhow::Result<String> {
    let contents =
        fs::read(&opts.file).with_context(|| format!("Couldn't read {:?}", opts.file))?;

    let mut text = String::new();
    let bytes = if opts.base64 {
        let encoded = String::from_utf8(contents)
            .with_context(|| format!("Couldn't interpret {:?} as UTF-8", opts.file))?;
        let encoded = encoded.trim();
        writeln!(text, "id: {}", artifact_id(encoded))?;
        decode_jks(encoded).with_context(|| format!("Couldn't decode base64 in {:?}", opts.file))?
    } else {
        contents
    };

    let keystore = KeyStore::load(bytes.as_slice(), opts.password.as_deref())
        .with_context(|| format!("Couldn't load trust store {:?}", opts.file))?;

    writeln!(text, "{} entries", keystore.len())?;
    for (alias, entry) in keystore.entries() {
        let created = entry
            .creation_time
            .format(&Rfc3339)
            .context("Couldn't format entry creation time")?;
        writeln!(
            text,
            "{alias}\t{}\t{} bytes\t{created}",
            entry.certificate.cert_type,
            entry.certificate.content.len()
        )?;
    }
    Ok(text)
}
