// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Timed execution of a single variant.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::variant::Variant;

/// Iteration bound used by [`run_variant`].
pub const DEFAULT_BOUND: u32 = 1_000_000_000;

/// Outcome of one timed loop execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Loop body that was executed.
    pub variant: Variant,
    /// Number of multiples of 16 counted.
    pub count: u32,
    /// Wall-clock time spent inside the loop.
    pub elapsed: Duration,
}

impl RunResult {
    /// Label of the variant that produced this result.
    pub fn label(&self) -> &'static str {
        self.variant.label()
    }

    /// Elapsed time truncated to whole milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Wire shape of a [`RunResult`] used by the JSON reporter.
#[derive(Debug, Serialize)]
pub(crate) struct RunRecord {
    pub variant: Variant,
    pub label: &'static str,
    pub count: u32,
    pub elapsed_ms: u128,
}

impl From<&RunResult> for RunRecord {
    fn from(result: &RunResult) -> Self {
        Self {
            variant: result.variant,
            label: result.label(),
            count: result.count,
            elapsed_ms: result.elapsed_ms(),
        }
    }
}

/// Number of multiples of 16 in `[0, bound)`.
pub const fn expected_count(bound: u32) -> u32 {
    bound / 16 + if bound % 16 == 0 { 0 } else { 1 }
}

/// Runs `variant` over the fixed [`DEFAULT_BOUND`].
pub fn run_variant(variant: Variant) -> RunResult {
    run_variant_with_bound(variant, DEFAULT_BOUND)
}

/// Runs `variant` over `[0, bound)` and measures the loop alone.
pub fn run_variant_with_bound(variant: Variant, bound: u32) -> RunResult {
    let bound = black_box(bound);
    let start = Instant::now();
    let count = black_box(variant.count_multiples(bound));
    let elapsed = start.elapsed();
    RunResult { variant, count, elapsed }
}
