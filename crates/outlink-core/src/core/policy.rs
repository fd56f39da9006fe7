// outlink-core/src/core/policy.rs
// ============================================================================
// Module: Outlink Decoration Policy
// Description: Eligibility policy and fixed attribution tags.
// Purpose: Decide which links are decorated and with which constant tags.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The decoration policy decides whether a link is decorated at all and
//! supplies the constant attribution tags. Only links pointing at the
//! configured marketing domain are decorated; mail links and links to other
//! hosts pass through unchanged. Pass-through is the expected outcome for
//! ineligible links, not a failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default marketing domain substring matched against candidate links.
pub const DEFAULT_MARKETING_DOMAIN: &str = "outlink.dev";
/// Default `utm_source` tag applied to decorated links.
pub const DEFAULT_SOURCE: &str = "outlink";
/// Default edition tag applied to decorated links.
pub const DEFAULT_EDITION: &str = "team";
/// Mail scheme prefix excluded from decoration.
pub const MAILTO_SCHEME: &str = "mailto:";

// ============================================================================
// SECTION: Decoration Policy
// ============================================================================

/// Policy governing link eligibility and constant attribution tags.
///
/// # Invariants
/// - `marketing_domain` is matched as a plain substring of the candidate
///   href; it carries no scheme and no path.
/// - `source` and `edition` are emitted verbatim into query strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecorationPolicy {
    /// Marketing domain substring required for decoration.
    pub marketing_domain: String,
    /// Value of the `utm_source` parameter.
    pub source: String,
    /// Value of the `edition` parameter.
    pub edition: String,
}

impl Default for DecorationPolicy {
    fn default() -> Self {
        Self {
            marketing_domain: DEFAULT_MARKETING_DOMAIN.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            edition: DEFAULT_EDITION.to_string(),
        }
    }
}

impl DecorationPolicy {
    /// Creates a policy from explicit domain and tag values.
    #[must_use]
    pub fn new(
        marketing_domain: impl Into<String>,
        source: impl Into<String>,
        edition: impl Into<String>,
    ) -> Self {
        Self {
            marketing_domain: marketing_domain.into(),
            source: source.into(),
            edition: edition.into(),
        }
    }

    /// Returns true when the href falls inside the decoration policy.
    ///
    /// Empty hrefs, hrefs that do not contain the marketing domain, and
    /// `mailto:` links are ineligible. The check runs before any URL parsing,
    /// so relative links and other non-web targets are rejected here without
    /// ever reaching the parser.
    #[must_use]
    pub fn is_eligible(&self, href: &str) -> bool {
        !href.is_empty()
            && href.contains(self.marketing_domain.as_str())
            && !href.starts_with(MAILTO_SCHEME)
    }
}
