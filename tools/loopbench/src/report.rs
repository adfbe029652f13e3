// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented result rendering.
//!
//! Reporters are called by the driver after a run has finished, never from
//! inside a timed region. Each line is flushed immediately.

use std::fmt;
use std::io::Write;

use crate::error::ReportError;
use crate::runner::{RunRecord, RunResult};

/// Width the text reporter pads labels to.
const LABEL_WIDTH: usize = 24;

/// Sink for finished runs.
pub trait Reporter {
    /// Emits one finished run.
    fn report(&mut self, result: &RunResult) -> Result<(), ReportError>;
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, result: &RunResult) -> Result<(), ReportError> {
        (**self).report(result)
    }
}

/// Output format selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// `Label --> Count: N, Time: M ms`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Text => "text",
            Format::Json => "json",
        })
    }
}

/// Human readable reporter.
pub struct TextReporter<W> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, result: &RunResult) -> Result<(), ReportError> {
        writeln!(
            self.out,
            "{:<width$} --> Count: {}, Time: {} ms",
            result.label(),
            result.count,
            result.elapsed_ms(),
            width = LABEL_WIDTH
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// JSON-lines reporter.
pub struct JsonReporter<W> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, result: &RunResult) -> Result<(), ReportError> {
        serde_json::to_writer(&mut self.out, &RunRecord::from(result))?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Builds the reporter for `format` writing into `out`.
pub fn boxed_reporter<'a, W: Write + 'a>(format: Format, out: W) -> Box<dyn Reporter + 'a> {
    match format {
        Format::Text => Box::new(TextReporter::new(out)),
        Format::Json => Box::new(JsonReporter::new(out)),
    }
}
