// outlink-core/src/core/summary.rs
// ============================================================================
// Module: Outlink Build Summary
// Description: Copyable build and version report for a server deployment.
// Purpose: Compose the plain-text build report surfaced to operators.
// Dependencies: crate::core::context, serde
// ============================================================================

//! ## Overview
//! The build summary composes the human-readable build report for a running
//! deployment: server version, schema version, build number, database driver,
//! build hash and date, and the hostname the client is connected to. The
//! report is plain string composition; rendering and localization of the
//! surrounding surface stay with the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::context::ServerBuild;

// ============================================================================
// SECTION: Labels
// ============================================================================

/// Label for the server version line.
const LABEL_SERVER_VERSION: &str = "Server Version:";
/// Label for the database schema version line.
const LABEL_SCHEMA_VERSION: &str = "Database Schema Version:";
/// Label for the build number line.
const LABEL_BUILD_NUMBER: &str = "Build Number:";
/// Label for the database driver line.
const LABEL_DATABASE: &str = "Database:";
/// Label for the build hash line.
const LABEL_BUILD_HASH: &str = "Build Hash:";
/// Label for the build date line.
const LABEL_BUILD_DATE: &str = "Build Date:";
/// Label for the hostname line.
const LABEL_HOSTNAME: &str = "Hostname:";
/// Build number shown for development builds.
const BUILD_NUMBER_UNAVAILABLE: &str = "n/a";
/// Hostname text for disconnected clients.
const HOSTNAME_DISCONNECTED: &str = "disconnected";
/// Hostname text when the server did not report one.
const HOSTNAME_UNKNOWN: &str = "server did not provide hostname";

// ============================================================================
// SECTION: Hostname Status
// ============================================================================

/// Connection-derived hostname state reported in the build summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostnameStatus {
    /// The client is not connected to the server.
    Disconnected,
    /// The server reported its hostname.
    Known(String),
    /// The client is connected but the server did not provide a hostname.
    #[default]
    Unknown,
}

impl HostnameStatus {
    /// Returns the hostname text shown in the report.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Disconnected => HOSTNAME_DISCONNECTED.to_string(),
            Self::Known(hostname) => hostname.clone(),
            Self::Unknown => HOSTNAME_UNKNOWN.to_string(),
        }
    }
}

// ============================================================================
// SECTION: Build Summary
// ============================================================================

/// Build and version metadata for a server deployment.
///
/// # Invariants
/// - Strings are opaque and not normalized by this type.
/// - Absent optional fields are omitted from the report rather than rendered
///   as placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSummary {
    /// Server build metadata.
    pub build: ServerBuild,
    /// Database schema version.
    pub schema_version: Option<String>,
    /// Database driver name.
    pub database_driver: Option<String>,
    /// Build hash.
    pub build_hash: Option<String>,
    /// Build date.
    pub build_date: Option<String>,
    /// Hostname state derived from the server connection.
    pub hostname: HostnameStatus,
}

impl BuildSummary {
    /// Creates a summary for the provided server build.
    #[must_use]
    pub fn new(build: ServerBuild) -> Self {
        Self {
            build,
            schema_version: None,
            database_driver: None,
            build_hash: None,
            build_date: None,
            hostname: HostnameStatus::default(),
        }
    }

    /// Sets the database schema version.
    #[must_use]
    pub fn with_schema_version(mut self, schema_version: impl Into<String>) -> Self {
        self.schema_version = Some(schema_version.into());
        self
    }

    /// Sets the database driver name.
    #[must_use]
    pub fn with_database_driver(mut self, database_driver: impl Into<String>) -> Self {
        self.database_driver = Some(database_driver.into());
        self
    }

    /// Sets the build hash.
    #[must_use]
    pub fn with_build_hash(mut self, build_hash: impl Into<String>) -> Self {
        self.build_hash = Some(build_hash.into());
        self
    }

    /// Sets the build date.
    #[must_use]
    pub fn with_build_date(mut self, build_date: impl Into<String>) -> Self {
        self.build_date = Some(build_date.into());
        self
    }

    /// Sets the hostname state.
    #[must_use]
    pub fn with_hostname(mut self, hostname: HostnameStatus) -> Self {
        self.hostname = hostname;
        self
    }

    /// Returns the displayed build number.
    ///
    /// Development builds display `n/a`; release builds display the raw build
    /// number. Returns `None` when the server reported no build number.
    #[must_use]
    pub fn build_number_display(&self) -> Option<String> {
        if self.build.is_dev_build() {
            return Some(BUILD_NUMBER_UNAVAILABLE.to_string());
        }
        self.build.build_number.clone()
    }

    /// Composes the copyable plain-text report, one labeled line per field.
    #[must_use]
    pub fn report(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("{LABEL_SERVER_VERSION} {}", self.build.resolved_version()));
        if let Some(schema_version) = &self.schema_version {
            lines.push(format!("{LABEL_SCHEMA_VERSION} {schema_version}"));
        }
        if let Some(build_number) = self.build_number_display() {
            lines.push(format!("{LABEL_BUILD_NUMBER} {build_number}"));
        }
        if let Some(database_driver) = &self.database_driver {
            lines.push(format!("{LABEL_DATABASE} {database_driver}"));
        }
        if let Some(build_hash) = &self.build_hash {
            lines.push(format!("{LABEL_BUILD_HASH} {build_hash}"));
        }
        if let Some(build_date) = &self.build_date {
            lines.push(format!("{LABEL_BUILD_DATE} {build_date}"));
        }
        lines.push(format!("{LABEL_HOSTNAME} {}", self.hostname.describe()));
        lines.join("\n")
    }
}
