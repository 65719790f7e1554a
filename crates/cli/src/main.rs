// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use tlrs::Cli;

fn main() {
    let cli = Cli::parse();
    tlrs::setup_logging();
    if let Err(e) = tlrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
