// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::io::stdout;

use clap::Parser;

use trust_store_client::shims::inspect_trust_store;

fn main() -> anyhow::Result<()> {
    let opts = inspect_trust_store::InspectTrustStoreOpts::parse();
    opts.verbosity.init();
    inspect_trust_store::main(&opts, &mut stdout())
}
