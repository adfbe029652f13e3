// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for plan building, config loading and reporting.

use std::path::PathBuf;

use crate::variant::Variant;

/// Result alias for loopbench operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors produced while building or executing a run plan.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The name does not match any known loop-body variant.
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),
    /// A plan step could not be parsed.
    #[error("invalid plan step `{0}`: expected `name[:repeats]`")]
    InvalidStep(String),
    /// A step asked for zero repetitions.
    #[error("variant `{variant}` must run at least once")]
    ZeroRepeats {
        /// Offending variant.
        variant: Variant,
    },
    /// The plan asked for zero rounds.
    #[error("rounds must be at least 1")]
    ZeroRounds,
    /// The plan contains no steps.
    #[error("run plan is empty")]
    EmptyPlan,
    /// Loading the plan file failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Writing a report line failed.
    #[error(transparent)]
    Report(#[from] ReportError),
    /// A variant produced a count that disagrees with the closed form.
    #[error("variant `{variant}` counted {actual}, expected {expected}")]
    CountMismatch {
        /// Variant that miscounted.
        variant: Variant,
        /// Number of multiples of 16 below the bound.
        expected: u32,
        /// Count returned by the loop.
        actual: u32,
    },
}

/// Errors raised while reading a TOML plan file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The file is not a valid plan document.
    #[error("invalid plan file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised by a [`crate::report::Reporter`].
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The output stream rejected the write.
    #[error("report write failed: {0}")]
    Io(#[from] std::io::Error),
    /// The result could not be encoded as JSON.
    #[error("report encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
