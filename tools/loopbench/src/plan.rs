// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! CONTEXT: Ordered run plan consumed by the driver
//! INVARIANTS: at least one step, every step runs >= 1 time, rounds >= 1
//!
//! A plan is executed round by round; inside a round each step runs its
//! variant `repeats` times back to back before moving on to the next step.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::runner::DEFAULT_BOUND;
use crate::variant::Variant;

/// Rounds used by [`RunPlan::default`].
pub const DEFAULT_ROUNDS: u32 = 3;

/// One entry of a run plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanStep {
    /// Loop body to execute.
    pub variant: Variant,
    /// Consecutive executions per round.
    pub repeats: u32,
}

impl PlanStep {
    /// Creates a step that runs `variant` once per round.
    pub const fn once(variant: Variant) -> Self {
        Self { variant, repeats: 1 }
    }

    /// Creates a step with an explicit repeat count.
    pub const fn new(variant: Variant, repeats: u32) -> Self {
        Self { variant, repeats }
    }
}

impl FromStr for PlanStep {
    type Err = Error;

    /// Parses `name` or `name:repeats`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, repeats) = match s.split_once(':') {
            Some((name, repeats)) => {
                let repeats = repeats
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| Error::InvalidStep(s.to_string()))?;
                (name, repeats)
            }
            None => (s, 1),
        };
        if name.trim().is_empty() {
            return Err(Error::InvalidStep(s.to_string()));
        }
        let variant = name.parse::<Variant>()?;
        if repeats == 0 {
            return Err(Error::ZeroRepeats { variant });
        }
        Ok(Self { variant, repeats })
    }
}

/// Ordered list of variant executions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    /// Exclusive upper bound of every loop.
    pub bound: u32,
    /// Number of passes over `steps`.
    pub rounds: u32,
    /// Steps in execution order.
    pub steps: Vec<PlanStep>,
}

impl Default for RunPlan {
    /// Every variant once per round, three rounds, full bound.
    fn default() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            rounds: DEFAULT_ROUNDS,
            steps: Variant::ALL.into_iter().map(PlanStep::once).collect(),
        }
    }
}

impl RunPlan {
    /// Builds a plan from explicit parts and validates it.
    pub fn new(bound: u32, rounds: u32, steps: Vec<PlanStep>) -> Result<Self> {
        let plan = Self { bound, rounds, steps };
        plan.validate()?;
        Ok(plan)
    }

    /// Parses a comma separated step list such as `single-branch:2,named-branch`.
    pub fn parse_steps(list: &str) -> Result<Vec<PlanStep>> {
        let steps = list
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<PlanStep>>>()?;
        if steps.is_empty() {
            return Err(Error::EmptyPlan);
        }
        Ok(steps)
    }

    /// Checks the plan invariants.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(Error::EmptyPlan);
        }
        if self.rounds == 0 {
            return Err(Error::ZeroRounds);
        }
        if let Some(step) = self.steps.iter().find(|step| step.repeats == 0) {
            return Err(Error::ZeroRepeats { variant: step.variant });
        }
        Ok(())
    }

    /// Variants in the order the driver executes them.
    pub fn runs(&self) -> impl Iterator<Item = Variant> + '_ {
        (0..self.rounds).flat_map(move |_| {
            self.steps
                .iter()
                .flat_map(|step| std::iter::repeat_n(step.variant, step.repeats as usize))
        })
    }

    /// Total number of variant executions.
    pub fn total_runs(&self) -> u64 {
        let per_round: u64 = self.steps.iter().map(|step| u64::from(step.repeats)).sum();
        per_round * u64::from(self.rounds)
    }
}
