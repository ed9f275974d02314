//! Integration tests for CLI structure, help and version output.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn reach() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("reach"));
    cmd.env("NO_COLOR", "1");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    reach().assert().code(2).stderr(predicate::str::contains(
        "Find the public hostname of an SSH tunnel",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    reach()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    reach()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reach"));
}

#[test]
fn test_version_command_shows_version() {
    reach()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "reach {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json_outputs_valid_json() {
    let output = reach()
        .args(["version", "--json"])
        .output()
        .expect("run reach");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_info_help_shows_flags() {
    reach()
        .args(["info", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--hostname-only"))
        .stdout(predicate::str::contains("--tunnel"))
        .stdout(predicate::str::contains("--attempts"))
        .stdout(predicate::str::contains("--platform"));
}

#[test]
fn test_info_rejects_out_of_range_attempts() {
    reach()
        .args(["info", "--attempts", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--attempts"));
}

#[test]
fn test_unknown_platform_rejected() {
    reach()
        .args(["info", "--platform", "windows"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("linux"));
}

// --- NO_COLOR convention ---

#[test]
fn test_no_color_env_accepts_any_value() {
    for value in ["1", "true", "yes", ""] {
        reach()
            .env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("reach "));
    }
}

#[test]
fn test_no_color_env_does_not_break_subcommand_parsing() {
    reach()
        .env("NO_COLOR", "1")
        .args(["info", "--help"])
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid value").not());
}
