// outlink-core/src/core/context.rs
// ============================================================================
// Module: Outlink Decoration Context
// Description: Per-call ambient values threaded into link decoration.
// Purpose: Replace ambient global-state lookup with explicit parameters.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! The decoration context carries the ambient values a decorated link
//! attributes traffic to: the active user, the telemetry session, and the
//! server build. Callers resolve the context once per request or render cycle
//! and pass it into every [`decorate`](crate::runtime::decorator::LinkDecorator::decorate)
//! call; the core never reads it from a global store.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::TelemetryId;
use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Literal build-number marker identifying a development build.
pub const DEV_BUILD_MARKER: &str = "dev";

// ============================================================================
// SECTION: Server Build
// ============================================================================

/// Build metadata reported by the server.
///
/// # Invariants
/// - `build_number` is either the dev marker or an opaque build string.
/// - `version` is a semantic version string when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerBuild {
    /// Raw build number, possibly the dev marker.
    pub build_number: Option<String>,
    /// Semantic server version.
    pub version: Option<String>,
}

impl ServerBuild {
    /// Creates build metadata from raw build number and version strings.
    #[must_use]
    pub fn new(build_number: Option<String>, version: Option<String>) -> Self {
        Self {
            build_number,
            version,
        }
    }

    /// Returns true when the build number equals the dev marker.
    #[must_use]
    pub fn is_dev_build(&self) -> bool {
        self.build_number.as_deref() == Some(DEV_BUILD_MARKER)
    }

    /// Resolves the version string reported to attribution consumers.
    ///
    /// Development builds report the dev marker verbatim. Release builds
    /// report the semantic version, falling back to the empty string when the
    /// server did not provide one.
    #[must_use]
    pub fn resolved_version(&self) -> String {
        if self.is_dev_build() {
            return DEV_BUILD_MARKER.to_string();
        }
        self.version.clone().unwrap_or_default()
    }
}

// ============================================================================
// SECTION: Decoration Context
// ============================================================================

/// Ambient values supplied per decoration call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationContext {
    /// Active user identifier, possibly empty.
    pub user_id: UserId,
    /// Telemetry session identifier, possibly empty.
    pub telemetry_id: TelemetryId,
    /// Server build metadata.
    pub server_build: ServerBuild,
}

impl DecorationContext {
    /// Creates a context from resolved ambient values.
    #[must_use]
    pub fn new(user_id: UserId, telemetry_id: TelemetryId, server_build: ServerBuild) -> Self {
        Self {
            user_id,
            telemetry_id,
            server_build,
        }
    }
}
