// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! loopbench entry point: parse flags, install the stderr subscriber, run the plan.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use loopbench::cli::{execute, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match execute(&cli, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("loopbench: {err}");
            ExitCode::FAILURE
        }
    }
}
