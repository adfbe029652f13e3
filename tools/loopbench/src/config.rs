// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! TOML plan files.
//!
//! ```toml
//! bound = 1000000000
//! rounds = 3
//!
//! [[step]]
//! variant = "single-conditional"
//! repeats = 2
//! ```
//!
//! Every key is optional. Missing keys fall back to [`RunPlan::default`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::plan::{PlanStep, RunPlan};
use crate::variant::Variant;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanFile {
    bound: Option<u32>,
    rounds: Option<u32>,
    #[serde(default, rename = "step")]
    steps: Vec<StepEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StepEntry {
    variant: Variant,
    #[serde(default = "one")]
    repeats: u32,
}

fn one() -> u32 {
    1
}

/// Parses a plan document.
pub fn parse(text: &str) -> Result<RunPlan> {
    let file: PlanFile = toml::from_str(text).map_err(ConfigError::from)?;
    let defaults = RunPlan::default();
    let steps = if file.steps.is_empty() {
        defaults.steps
    } else {
        file.steps
            .into_iter()
            .map(|entry| PlanStep::new(entry.variant, entry.repeats))
            .collect()
    };
    RunPlan::new(
        file.bound.unwrap_or(defaults.bound),
        file.rounds.unwrap_or(defaults.rounds),
        steps,
    )
}

/// Reads and parses the plan document at `path`.
pub fn load(path: &Path) -> Result<RunPlan> {
    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), "loaded plan file");
    parse(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_document_is_default_plan() {
        assert_eq!(parse("").unwrap(), RunPlan::default());
    }

    #[test]
    fn full_document() {
        let plan = parse(
            r#"
            bound = 4096
            rounds = 2

            [[step]]
            variant = "named-branchless"
            repeats = 3

            [[step]]
            variant = "single-conditional"
            "#,
        )
        .unwrap();
        assert_eq!(plan.bound, 4096);
        assert_eq!(plan.rounds, 2);
        assert_eq!(
            plan.steps,
            vec![
                PlanStep::new(Variant::NamedBranchless, 3),
                PlanStep::once(Variant::SingleConditional),
            ]
        );
    }

    #[test]
    fn partial_document_keeps_default_steps() {
        let plan = parse("rounds = 1").unwrap();
        assert_eq!(plan.rounds, 1);
        assert_eq!(plan.steps, RunPlan::default().steps);
    }

    #[test]
    fn rejects_unknown_keys_and_variants() {
        assert!(matches!(parse("bounds = 3"), Err(Error::Config(ConfigError::Parse(_)))));
        assert!(matches!(
            parse("[[step]]\nvariant = \"ternary\""),
            Err(Error::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn step_names_accept_command_line_spellings() {
        let plan = parse(
            "[[step]]\nvariant = \"named_branch\"\n[[step]]\nvariant = \"Single-Branchless\"",
        )
        .unwrap();
        assert_eq!(
            plan.steps,
            vec![PlanStep::once(Variant::NamedBranch), PlanStep::once(Variant::SingleBranchless)]
        );
    }

    #[test]
    fn plan_invariants_apply_to_files() {
        assert!(matches!(parse("rounds = 0"), Err(Error::ZeroRounds)));
        assert!(matches!(
            parse("[[step]]\nvariant = \"single-branch\"\nrepeats = 0"),
            Err(Error::ZeroRepeats { .. })
        ));
    }
}
