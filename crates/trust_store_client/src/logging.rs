// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::{ArgAction, Args};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Default, Args)]
pub struct Verbosity {
    #[arg(
        short,
        long,
        global = true,
        help = "Suppress non-error output and set the log level to WARN."
    )]
    pub quiet: bool,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase verbosity level, can be used multiple times."
    )]
    pub verbose: u8,
}

impl Verbosity {
    pub fn level(&self) -> Level {
        match (self.quiet, self.verbose) {
            (true, _) => Level::WARN,
            (false, 0) => Level::INFO,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        }
    }

    /// Installs a stderr logger at [`Self::level`]. Does nothing if one is already installed.
    pub fn init(&self) {
        let subscriber = FmtSubscriber::builder()
            .with_writer(std::io::stderr)
            .with_max_level(self.level())
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}
