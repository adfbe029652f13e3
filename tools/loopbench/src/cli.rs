// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Command line front end shared by the binary and the tests.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use crate::config;
use crate::driver::drive;
use crate::error::Result;
use crate::plan::RunPlan;
use crate::report::{boxed_reporter, Format};
use crate::runner::RunResult;
use crate::variant::Variant;

/// Times counting loops that differ only in loop-body shape.
#[derive(Debug, Parser)]
#[command(name = "loopbench", version, about)]
pub struct Cli {
    /// TOML plan file (`bound`, `rounds`, `[[step]]` tables).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma separated steps, `name[:repeats]`; replaces the configured steps.
    #[arg(short, long, value_name = "STEPS")]
    pub plan: Option<String>,

    /// Passes over the step list.
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Exclusive upper bound of every loop.
    #[arg(short, long)]
    pub bound: Option<u32>,

    /// Report format written to stdout.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print the available variants and exit.
    #[arg(short, long)]
    pub list: bool,

    /// More diagnostics on stderr (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors on stderr.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Diagnostic level implied by `-v`/`-q`.
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Resolves the run plan: defaults, then the config file, then flags.
    pub fn plan(&self) -> Result<RunPlan> {
        let mut plan = match &self.config {
            Some(path) => config::load(path)?,
            None => RunPlan::default(),
        };
        if let Some(steps) = &self.plan {
            plan.steps = RunPlan::parse_steps(steps)?;
        }
        if let Some(rounds) = self.rounds {
            plan.rounds = rounds;
        }
        if let Some(bound) = self.bound {
            plan.bound = bound;
        }
        plan.validate()?;
        Ok(plan)
    }
}

/// Writes the variant table to `out`.
pub fn list_variants<W: Write>(mut out: W) -> std::io::Result<()> {
    for variant in Variant::ALL {
        writeln!(out, "{:<20} {}", variant.name(), variant.label())?;
    }
    Ok(())
}

/// Executes the parsed command line, writing reports to `out`.
pub fn execute<W: Write>(cli: &Cli, mut out: W) -> Result<Vec<RunResult>> {
    if cli.list {
        list_variants(&mut out).map_err(crate::error::ReportError::from)?;
        return Ok(Vec::new());
    }
    let plan = cli.plan()?;
    let mut reporter = boxed_reporter(cli.format, out);
    drive(&plan, &mut reporter)
}
