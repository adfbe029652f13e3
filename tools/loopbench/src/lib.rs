// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Counting-loop micro benchmark
//! OWNERS: @runtime
//! STATUS: Experimental
//! API_STABILITY: Unstable
//! TEST_COVERAGE: Unit tests per module, integration tests in `tests/`, criterion bench in `benches/`
//!
//! Times a loop that counts multiples of 16 below a bound, once per loop-body
//! [`Variant`]. All variants compute the same count; only the shape of the
//! loop body differs. A [`RunPlan`] lists which variants run in which order
//! and [`drive`] executes it, feeding each [`RunResult`] to a [`Reporter`].

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod plan;
pub mod report;
pub mod runner;
pub mod variant;

pub use driver::drive;
pub use error::{ConfigError, Error, ReportError, Result};
pub use plan::{PlanStep, RunPlan, DEFAULT_ROUNDS};
pub use report::{boxed_reporter, Format, JsonReporter, Reporter, TextReporter};
pub use runner::{expected_count, run_variant, run_variant_with_bound, RunResult, DEFAULT_BOUND};
pub use variant::{branchless_is_multiple_of_16, Variant};
