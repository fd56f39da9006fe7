// outlink-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for Outlink configuration. Outputs are deterministic
//! and kept in sync with the config model; the example must always pass
//! validation.

/// Returns a canonical example `outlink.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[policy]
marketing_domain = "outlink.dev"
source = "outlink"
edition = "team"
"#,
    )
}
