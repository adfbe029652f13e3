// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Plan files and command-line precedence, end to end through `execute`.

use std::fs;

use clap::Parser;
use loopbench::cli::{execute, Cli};
use loopbench::{config, ConfigError, Error, PlanStep, Variant};
use tempfile::TempDir;

fn write_plan(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("plan.toml");
    fs::write(&path, body).expect("write plan");
    path
}

#[test]
fn config_file_drives_the_run() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_plan(
        &dir,
        r#"
        bound = 48
        rounds = 2

        [[step]]
        variant = "named-branchless"
        repeats = 2

        [[step]]
        variant = "single-branch"
        "#,
    );
    let cli = Cli::try_parse_from(["loopbench", "--config", path.to_str().unwrap(), "--format", "json"])
        .expect("parse args");
    let mut out = Vec::new();
    let results = execute(&cli, &mut out).expect("execute");
    assert_eq!(results.len(), 6);

    let text = String::from_utf8(out).expect("utf8");
    let variants: Vec<String> = text
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).expect("json line");
            assert_eq!(value["count"], 3);
            value["variant"].as_str().expect("variant").to_string()
        })
        .collect();
    assert_eq!(
        variants,
        [
            "named-branchless",
            "named-branchless",
            "single-branch",
            "named-branchless",
            "named-branchless",
            "single-branch",
        ]
    );
}

#[test]
fn flags_win_over_config() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_plan(&dir, "bound = 48\nrounds = 5\n[[step]]\nvariant = \"single-branch\"\n");
    let cli = Cli::try_parse_from([
        "loopbench",
        "-c",
        path.to_str().unwrap(),
        "-r",
        "1",
        "-p",
        "named-conditional:3",
    ])
    .expect("parse args");
    let plan = cli.plan().expect("plan");
    assert_eq!(plan.bound, 48);
    assert_eq!(plan.rounds, 1);
    assert_eq!(plan.steps, vec![PlanStep::new(Variant::NamedConditional, 3)]);
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = config::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
    match err {
        Error::Config(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}
