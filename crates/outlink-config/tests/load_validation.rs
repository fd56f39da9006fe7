//! Config loading tests for outlink-config.
// outlink-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Tests
// Description: Validate the file loading pipeline and its limits.
// Purpose: Ensure loading fails closed on missing, oversized, or bad files.
// =============================================================================

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

use std::fs;

use outlink_config::ConfigError;
use outlink_config::OutlinkConfig;

type TestResult = Result<(), String>;

#[test]
fn explicit_path_loads_and_validates() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("outlink.toml");
    fs::write(
        &path,
        r#"[policy]
marketing_domain = "example-marketing.test"
source = "chatapp"
edition = "team"
"#,
    )
    .map_err(|err| err.to_string())?;

    let config = OutlinkConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.policy.marketing_domain != "example-marketing.test" {
        return Err("marketing_domain not loaded from file".to_string());
    }
    Ok(())
}

#[test]
fn missing_explicit_path_fails_closed() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");

    match OutlinkConfig::load(Some(&path)) {
        Err(ConfigError::Io(message)) => {
            if message.contains("not found") {
                Ok(())
            } else {
                Err(format!("unexpected io error: {message}"))
            }
        }
        Err(other) => Err(format!("unexpected error kind: {other}")),
        Ok(_) => Err("expected missing explicit config to fail".to_string()),
    }
}

#[test]
fn invalid_toml_reports_parse_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("outlink.toml");
    fs::write(&path, "[policy\nmarketing_domain = ").map_err(|err| err.to_string())?;

    match OutlinkConfig::load(Some(&path)) {
        Err(ConfigError::Parse(_)) => Ok(()),
        Err(other) => Err(format!("unexpected error kind: {other}")),
        Ok(_) => Err("expected parse failure".to_string()),
    }
}

#[test]
fn unknown_fields_rejected() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("outlink.toml");
    fs::write(
        &path,
        r#"[policy]
marketing_domain = "outlink.dev"
medium = "email"
"#,
    )
    .map_err(|err| err.to_string())?;

    match OutlinkConfig::load(Some(&path)) {
        Err(ConfigError::Parse(_)) => Ok(()),
        Err(other) => Err(format!("unexpected error kind: {other}")),
        Ok(_) => Err("expected unknown field to be rejected".to_string()),
    }
}

#[test]
fn invalid_policy_fields_fail_closed_on_load() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("outlink.toml");
    fs::write(
        &path,
        r#"[policy]
marketing_domain = "https://outlink.dev"
"#,
    )
    .map_err(|err| err.to_string())?;

    match OutlinkConfig::load(Some(&path)) {
        Err(ConfigError::Invalid(message)) => {
            if message.contains("policy.marketing_domain") {
                Ok(())
            } else {
                Err(format!("unexpected invalid message: {message}"))
            }
        }
        Err(other) => Err(format!("unexpected error kind: {other}")),
        Ok(_) => Err("expected invalid domain to be rejected".to_string()),
    }
}

#[test]
fn oversized_config_rejected() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("outlink.toml");
    let mut text = String::from("# padding\n");
    while text.len() <= 1024 * 1024 {
        text.push_str("# padding padding padding padding padding padding padding padding\n");
    }
    fs::write(&path, text).map_err(|err| err.to_string())?;

    match OutlinkConfig::load(Some(&path)) {
        Err(ConfigError::Invalid(message)) => {
            if message.contains("max size") {
                Ok(())
            } else {
                Err(format!("unexpected invalid message: {message}"))
            }
        }
        Err(other) => Err(format!("unexpected error kind: {other}")),
        Ok(_) => Err("expected oversized config to be rejected".to_string()),
    }
}
