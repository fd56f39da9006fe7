// outlink-core/src/runtime/decorator.rs
// ============================================================================
// Module: Outlink Link Decorator
// Description: Deterministic decoration of eligible outbound links.
// Purpose: Merge attribution parameters into marketing-site URLs.
// Dependencies: crate::core, indexmap, thiserror, url
// ============================================================================

//! ## Overview
//! The decorator evaluates the eligibility policy first and passes ineligible
//! links through unchanged. Eligible links are parsed, their existing query
//! parameters extracted, and the attribution parameter set merged in layers
//! of increasing priority: fixed defaults, computed defaults, caller
//! overrides, then the URL's own pre-existing parameters. A link that already
//! carries an attribution parameter is never overridden, which also makes
//! decoration idempotent.
//!
//! Parse failures on eligible hrefs indicate a caller bug and propagate as
//! [`DecorateError`]; they are never silently passed through.

// ============================================================================
// SECTION: Imports
// ============================================================================

use indexmap::IndexMap;
use thiserror::Error;
use url::Url;

use crate::core::context::DecorationContext;
use crate::core::outcome::Decoration;
use crate::core::policy::DecorationPolicy;
use crate::core::request::LinkRequest;
use crate::runtime::encoding::serialize_query;

// ============================================================================
// SECTION: Parameter Names
// ============================================================================

/// Query parameter carrying the source tag.
pub const PARAM_SOURCE: &str = "utm_source";
/// Query parameter carrying the location tag.
pub const PARAM_CONTENT: &str = "utm_content";
/// Query parameter carrying the user identifier.
pub const PARAM_USER_ID: &str = "uid";
/// Query parameter carrying the telemetry session identifier.
pub const PARAM_SESSION_ID: &str = "sid";
/// Query parameter carrying the edition tag.
pub const PARAM_EDITION: &str = "edition";
/// Query parameter carrying the resolved server version.
pub const PARAM_SERVER_VERSION: &str = "server_version";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Decoration failures.
#[derive(Debug, Error)]
pub enum DecorateError {
    /// An eligible href failed URL parsing.
    #[error("malformed href {href:?}: {source}")]
    MalformedHref {
        /// The href that failed to parse.
        href: String,
        /// Underlying parse error.
        source: url::ParseError,
    },
}

// ============================================================================
// SECTION: Link Decorator
// ============================================================================

/// Decorates outbound links according to a [`DecorationPolicy`].
///
/// Decoration is a pure function of the request, the context, and the policy.
/// The decorator holds no mutable state and may be shared freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct LinkDecorator {
    /// Policy governing eligibility and constant tags.
    policy: DecorationPolicy,
}

impl LinkDecorator {
    /// Creates a decorator with the provided policy.
    #[must_use]
    pub const fn new(policy: DecorationPolicy) -> Self {
        Self {
            policy,
        }
    }

    /// Returns the active policy.
    #[must_use]
    pub const fn policy(&self) -> &DecorationPolicy {
        &self.policy
    }

    /// Decorates a link request against the provided context.
    ///
    /// Ineligible links yield a pass-through outcome with the original href
    /// unchanged and no parameters applied.
    ///
    /// # Errors
    ///
    /// Returns [`DecorateError::MalformedHref`] when an eligible href fails
    /// URL parsing.
    pub fn decorate(
        &self,
        request: &LinkRequest,
        context: &DecorationContext,
    ) -> Result<Decoration, DecorateError> {
        if !self.policy.is_eligible(&request.href) {
            return Ok(Decoration::passthrough(request.href.clone()));
        }

        let mut url = Url::parse(&request.href).map_err(|source| DecorateError::MalformedHref {
            href: request.href.clone(),
            source,
        })?;

        // Last value wins for repeated keys, matching standard query semantics.
        let mut existing = IndexMap::new();
        for (key, value) in url.query_pairs() {
            existing.insert(key.into_owned(), value.into_owned());
        }

        let merged = self.merge_params(request, context, existing);
        url.set_query(Some(&serialize_query(&merged)));

        Ok(Decoration {
            url: String::from(url),
            applied_params: merged,
        })
    }

    /// Builds the merged parameter map in layer order.
    ///
    /// Later layers replace earlier values on key collision while keeping the
    /// key's original insertion position, so the serialized order stays
    /// stable: defaults first, then overrides, then pre-existing parameters.
    fn merge_params(
        &self,
        request: &LinkRequest,
        context: &DecorationContext,
        existing: IndexMap<String, String>,
    ) -> IndexMap<String, String> {
        let mut merged = IndexMap::new();
        merged.insert(PARAM_SOURCE.to_string(), self.policy.source.clone());
        merged.insert(PARAM_CONTENT.to_string(), request.location.as_str().to_string());
        merged.insert(PARAM_USER_ID.to_string(), context.user_id.as_str().to_string());
        merged.insert(PARAM_SESSION_ID.to_string(), context.telemetry_id.as_str().to_string());
        merged.insert(PARAM_EDITION.to_string(), self.policy.edition.clone());
        merged.insert(PARAM_SERVER_VERSION.to_string(), context.server_build.resolved_version());

        for (key, value) in &request.overrides {
            merged.insert(key.clone(), value.clone());
        }

        // Pre-existing URL parameters take final precedence.
        for (key, value) in existing {
            merged.insert(key, value);
        }

        merged
    }
}
