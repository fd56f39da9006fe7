// outlink-config/src/config.rs
// ============================================================================
// Module: Outlink Configuration
// Description: Configuration loading and validation for Outlink.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: outlink-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! An explicitly named file that is missing or invalid fails closed; only the
//! implicit default path is allowed to be absent, in which case the built-in
//! defaults apply.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use outlink_core::DEFAULT_EDITION;
use outlink_core::DEFAULT_MARKETING_DOMAIN;
use outlink_core::DEFAULT_SOURCE;
use outlink_core::DecorationPolicy;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "outlink.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "OUTLINK_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of the marketing domain.
pub(crate) const MAX_MARKETING_DOMAIN_LENGTH: usize = 253;
/// Maximum length of the source and edition tags.
pub(crate) const MAX_TAG_LENGTH: usize = 64;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Outlink configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutlinkConfig {
    /// Decoration policy configuration.
    #[serde(default)]
    pub policy: PolicyConfig,
}

/// Decoration policy configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    /// Marketing domain substring required for decoration.
    #[serde(default = "default_marketing_domain")]
    pub marketing_domain: String,
    /// Value of the `utm_source` parameter.
    #[serde(default = "default_source")]
    pub source: String,
    /// Value of the `edition` parameter.
    #[serde(default = "default_edition")]
    pub edition: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            marketing_domain: default_marketing_domain(),
            source: default_source(),
            edition: default_edition(),
        }
    }
}

/// Returns the default marketing domain.
fn default_marketing_domain() -> String {
    DEFAULT_MARKETING_DOMAIN.to_string()
}

/// Returns the default source tag.
fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

/// Returns the default edition tag.
fn default_edition() -> String {
    DEFAULT_EDITION.to_string()
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a lowercase tag value for the given field name.
fn validate_tag(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must not be empty")));
    }
    if value.len() > MAX_TAG_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    if !value.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        return Err(ConfigError::Invalid(format!(
            "{field} must contain only lowercase alphanumerics, '-', or '_'"
        )));
    }
    Ok(())
}

// ============================================================================
// SECTION: Loading and Validation
// ============================================================================

impl OutlinkConfig {
    /// Loads configuration from the resolved path.
    ///
    /// Resolution order: explicit `path`, then the `OUTLINK_CONFIG`
    /// environment variable, then `outlink.toml` in the working directory.
    /// A missing file fails closed unless it is the implicit default path,
    /// which falls back to the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, exceeds the size
    /// limit, fails TOML parsing, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path.is_some() || env::var(CONFIG_ENV_VAR).is_ok();
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;

        if !resolved.exists() {
            if explicit {
                return Err(ConfigError::Io(format!(
                    "config file not found: {}",
                    resolved.display()
                )));
            }
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let metadata = fs::metadata(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds max size".to_string()));
        }

        let text =
            fs::read_to_string(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration, failing closed on the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let domain = &self.policy.marketing_domain;
        if domain.is_empty() {
            return Err(ConfigError::Invalid(
                "policy.marketing_domain must not be empty".to_string(),
            ));
        }
        if domain.len() > MAX_MARKETING_DOMAIN_LENGTH {
            return Err(ConfigError::Invalid(
                "policy.marketing_domain exceeds max length".to_string(),
            ));
        }
        if domain.contains("://") {
            return Err(ConfigError::Invalid(
                "policy.marketing_domain must not include a scheme".to_string(),
            ));
        }
        if domain.chars().any(char::is_whitespace) {
            return Err(ConfigError::Invalid(
                "policy.marketing_domain must not contain whitespace".to_string(),
            ));
        }
        if domain.contains('/') {
            return Err(ConfigError::Invalid(
                "policy.marketing_domain must not contain a path".to_string(),
            ));
        }
        validate_tag("policy.source", &self.policy.source)?;
        validate_tag("policy.edition", &self.policy.edition)?;
        Ok(())
    }

    /// Converts the validated configuration into a core decoration policy.
    #[must_use]
    pub fn to_policy(&self) -> DecorationPolicy {
        DecorationPolicy::new(
            self.policy.marketing_domain.clone(),
            self.policy.source.clone(),
            self.policy.edition.clone(),
        )
    }
}
