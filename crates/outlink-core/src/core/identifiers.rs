// outlink-core/src/core/identifiers.rs
// ============================================================================
// Module: Outlink Identifiers
// Description: Canonical opaque identifiers threaded through link decoration.
// Purpose: Provide strongly typed, serializable tags with stable string forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the string-based identifiers used throughout Outlink.
//! Identifiers are opaque and serialize as strings. Empty values are legal:
//! a logged-out caller has no user identifier and a fresh installation has no
//! telemetry identifier yet. Validation is handled at configuration or CLI
//! boundaries rather than within these simple wrappers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Identifier of the active user on whose behalf a link is decorated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new user identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Session or installation identifier reported by the telemetry subsystem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TelemetryId(String);

impl TelemetryId {
    /// Creates a new telemetry identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TelemetryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for TelemetryId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TelemetryId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Short tag naming the caller location that requested decoration.
///
/// The tag becomes the `utm_content` value of decorated links, so callers
/// should keep it short and stable (for example `about_build_modal`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationTag(String);

impl LocationTag {
    /// Creates a new location tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for LocationTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LocationTag {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
