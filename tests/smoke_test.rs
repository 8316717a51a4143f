//! Smoke tests for the xfergen CLI.
//!
//! These tests verify basic CLI functionality:
//! - `xg --version` outputs version info
//! - `xg --help` outputs help text
//! - `xg` (no args) outputs valid JSON

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    TestEnv::new()
        .xg()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xg"))
        .stdout(predicate::str::contains("0.2.1"));
}

#[test]
fn test_help_flag() {
    TestEnv::new()
        .xg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn test_help_lists_server_subcommands() {
    TestEnv::new()
        .xg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("updog"))
        .stdout(predicate::str::contains("simple-http"))
        .stdout(predicate::str::contains("ftp"))
        .stdout(predicate::str::contains("tftp"));
}

#[test]
fn test_no_args_outputs_json() {
    let env = TestEnv::new();
    let output = env.xg().assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["servers"].as_array().unwrap().len(), 4);
}

#[test]
fn test_human_readable_flag() {
    TestEnv::new()
        .xg()
        .arg("-H")
        .assert()
        .success()
        .stdout(predicate::str::contains("Xfergen"));
}

#[test]
fn test_invalid_command() {
    TestEnv::new()
        .xg()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
