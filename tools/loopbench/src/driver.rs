// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Sequential plan execution.

use crate::error::{Error, Result};
use crate::plan::RunPlan;
use crate::report::Reporter;
use crate::runner::{expected_count, run_variant_with_bound, RunResult};

/// Executes `plan` in order, handing every finished run to `reporter`.
///
/// Each run is timed in isolation; the reporter is only invoked after the
/// loop has returned. A miscount or a failed report aborts the plan.
pub fn drive<R: Reporter + ?Sized>(plan: &RunPlan, reporter: &mut R) -> Result<Vec<RunResult>> {
    plan.validate()?;
    let expected = expected_count(plan.bound);
    let total = plan.total_runs();
    tracing::info!(bound = plan.bound, rounds = plan.rounds, runs = total, "starting plan");

    let mut results = Vec::new();
    for (index, variant) in plan.runs().enumerate() {
        let result = run_variant_with_bound(variant, plan.bound);
        tracing::debug!(
            run = index + 1,
            variant = variant.name(),
            count = result.count,
            elapsed_ms = result.elapsed_ms(),
            "run finished"
        );
        if result.count != expected {
            return Err(Error::CountMismatch { variant, expected, actual: result.count });
        }
        reporter.report(&result)?;
        results.push(result);
    }

    tracing::info!(runs = results.len(), "plan complete");
    Ok(results)
}
