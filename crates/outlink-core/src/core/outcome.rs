// outlink-core/src/core/outcome.rs
// ============================================================================
// Module: Outlink Decoration Outcome
// Description: Result type returned by link decoration.
// Purpose: Carry the final URL plus the parameter set actually applied.
// Dependencies: indexmap, serde
// ============================================================================

//! ## Overview
//! A decoration outcome is either a pass-through (the original href, no
//! parameters applied) or a decorated URL together with the merged parameter
//! map. The map preserves merge insertion order, matching the serialized
//! query string.

// ============================================================================
// SECTION: Imports
// ============================================================================

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Decoration
// ============================================================================

/// Outcome of a single decoration call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    /// Final URL, decorated or passed through unchanged.
    pub url: String,
    /// Parameters applied to the URL, empty for pass-through outcomes.
    pub applied_params: IndexMap<String, String>,
}

impl Decoration {
    /// Creates a pass-through outcome for an ineligible link.
    #[must_use]
    pub fn passthrough(href: impl Into<String>) -> Self {
        Self {
            url: href.into(),
            applied_params: IndexMap::new(),
        }
    }

    /// Returns true when no parameters were applied.
    #[must_use]
    pub fn is_passthrough(&self) -> bool {
        self.applied_params.is_empty()
    }
}
