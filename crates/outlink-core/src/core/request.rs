// outlink-core/src/core/request.rs
// ============================================================================
// Module: Outlink Link Request
// Description: Immutable per-call input for link decoration.
// Purpose: Carry the candidate href, location tag, and caller overrides.
// Dependencies: crate::core::identifiers, indexmap, serde
// ============================================================================

//! ## Overview
//! A link request is constructed per call and discarded with the result.
//! Caller overrides preserve insertion order so that serialized query strings
//! stay stable and predictable for consumers that log raw queries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::LocationTag;

// ============================================================================
// SECTION: Link Request
// ============================================================================

/// Immutable decoration input for a single outbound link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRequest {
    /// Candidate link to decorate.
    pub href: String,
    /// Location tag identifying the requesting call site.
    pub location: LocationTag,
    /// Caller-supplied parameter overrides, in insertion order.
    pub overrides: IndexMap<String, String>,
}

impl LinkRequest {
    /// Creates a request for the provided href with no location or overrides.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            location: LocationTag::default(),
            overrides: IndexMap::new(),
        }
    }

    /// Sets the location tag for this request.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<LocationTag>) -> Self {
        self.location = location.into();
        self
    }

    /// Adds a parameter override, replacing any prior value for the key.
    #[must_use]
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }
}
