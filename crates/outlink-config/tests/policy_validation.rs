//! Policy field validation tests for outlink-config.
// outlink-config/tests/policy_validation.rs
// =============================================================================
// Module: Policy Validation Tests
// Description: Validate fail-closed policy field checks.
// Purpose: Ensure every malformed policy field is rejected with a named error.
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

use outlink_config::ConfigError;
use outlink_config::OutlinkConfig;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn empty_marketing_domain_rejected() -> TestResult {
    let mut config = OutlinkConfig::default();
    config.policy.marketing_domain = String::new();
    assert_invalid(config.validate(), "policy.marketing_domain must not be empty")
}

#[test]
fn marketing_domain_with_scheme_rejected() -> TestResult {
    let mut config = OutlinkConfig::default();
    config.policy.marketing_domain = "https://outlink.dev".to_string();
    assert_invalid(config.validate(), "policy.marketing_domain must not include a scheme")
}

#[test]
fn marketing_domain_with_whitespace_rejected() -> TestResult {
    let mut config = OutlinkConfig::default();
    config.policy.marketing_domain = "outlink .dev".to_string();
    assert_invalid(config.validate(), "policy.marketing_domain must not contain whitespace")
}

#[test]
fn marketing_domain_with_path_rejected() -> TestResult {
    let mut config = OutlinkConfig::default();
    config.policy.marketing_domain = "outlink.dev/pricing".to_string();
    assert_invalid(config.validate(), "policy.marketing_domain must not contain a path")
}

#[test]
fn overlong_marketing_domain_rejected() -> TestResult {
    let mut config = OutlinkConfig::default();
    config.policy.marketing_domain = "a".repeat(254);
    assert_invalid(config.validate(), "policy.marketing_domain exceeds max length")
}

#[test]
fn empty_source_rejected() -> TestResult {
    let mut config = OutlinkConfig::default();
    config.policy.source = String::new();
    assert_invalid(config.validate(), "policy.source must not be empty")
}

#[test]
fn uppercase_source_rejected() -> TestResult {
    let mut config = OutlinkConfig::default();
    config.policy.source = "Outlink".to_string();
    assert_invalid(config.validate(), "policy.source must contain only lowercase")
}

#[test]
fn overlong_source_rejected() -> TestResult {
    let mut config = OutlinkConfig::default();
    config.policy.source = "a".repeat(65);
    assert_invalid(config.validate(), "policy.source exceeds max length")
}

#[test]
fn empty_edition_rejected() -> TestResult {
    let mut config = OutlinkConfig::default();
    config.policy.edition = String::new();
    assert_invalid(config.validate(), "policy.edition must not be empty")
}

#[test]
fn edition_with_symbols_rejected() -> TestResult {
    let mut config = OutlinkConfig::default();
    config.policy.edition = "team!".to_string();
    assert_invalid(config.validate(), "policy.edition must contain only lowercase")
}

#[test]
fn dashed_and_underscored_tags_accepted() -> TestResult {
    let mut config = OutlinkConfig::default();
    config.policy.source = "chat_app-2".to_string();
    config.policy.edition = "self-hosted".to_string();
    config.validate().map_err(|err| err.to_string())
}
