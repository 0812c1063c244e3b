// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::{stderr, stdout};
use std::process::ExitCode;

use clap::Parser;

use trust_store_client::shims::create_trust_store;

fn main() -> ExitCode {
    let opts = create_trust_store::CreateTrustStoreOpts::parse();
    opts.verbosity.init();
    match create_trust_store::main(&opts, &mut stdout(), &mut stderr()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
