// outlink-cli/tests/config_commands.rs
// ============================================================================
// Module: CLI Config Command Tests
// Description: Integration tests for CLI config validation workflows.
// Purpose: Ensure config validation reports success and fails closed on errors.
// Dependencies: outlink binary
// ============================================================================

//! ## Overview
//! Runs the CLI binary for config validation and ensures invalid
//! configuration fails closed with explicit errors. The emitted example must
//! itself validate.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn outlink_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_outlink"))
}

fn run_outlink(args: &[&str]) -> Output {
    Command::new(outlink_bin())
        .args(args)
        .env_remove("OUTLINK_CONFIG")
        .output()
        .expect("run outlink binary")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Verifies a valid config file passes validation.
#[test]
fn config_validate_accepts_valid_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("outlink.toml");
    fs::write(
        &path,
        r#"[policy]
marketing_domain = "example-marketing.test"
source = "chatapp"
edition = "team"
"#,
    )
    .expect("write config");

    let output = run_outlink(&[
        "config",
        "validate",
        "--config",
        path.to_str().expect("utf8 path"),
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(stdout.trim_end(), "Config valid.");
}

/// Verifies an invalid config file fails closed with a named field.
#[test]
fn config_validate_rejects_invalid_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("outlink.toml");
    fs::write(
        &path,
        r#"[policy]
marketing_domain = ""
"#,
    )
    .expect("write config");

    let output = run_outlink(&[
        "config",
        "validate",
        "--config",
        path.to_str().expect("utf8 path"),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("policy.marketing_domain must not be empty"));
}

/// Verifies a missing explicit config file fails closed.
#[test]
fn config_validate_rejects_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.toml");

    let output = run_outlink(&[
        "config",
        "validate",
        "--config",
        path.to_str().expect("utf8 path"),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Failed to load config"));
}

/// Verifies the emitted example config validates when fed back in.
#[test]
fn config_example_round_trips_through_validate() {
    let example = run_outlink(&["config", "example"]);
    assert!(example.status.success());

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("outlink.toml");
    fs::write(&path, &example.stdout).expect("write example config");

    let output = run_outlink(&[
        "config",
        "validate",
        "--config",
        path.to_str().expect("utf8 path"),
    ]);

    assert!(output.status.success());
}

/// Verifies the version flag reports the crate version.
#[test]
fn version_flag_reports_version() {
    let output = run_outlink(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert_eq!(stdout.trim_end(), format!("outlink {}", env!("CARGO_PKG_VERSION")));
}
