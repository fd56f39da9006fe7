// outlink-core/src/runtime/encoding.rs
// ============================================================================
// Module: Outlink Query Encoding
// Description: Component percent-encoding and query serialization.
// Purpose: Serialize merged parameter maps into stable query strings.
// Dependencies: indexmap, percent-encoding
// ============================================================================

//! ## Overview
//! Query serialization encodes each key and value independently and joins
//! pairs in map insertion order. The encode set matches the reference
//! component encoder consumed attribution pipelines expect: all bytes escape
//! except ASCII alphanumerics and `- _ . ! ~ * ' ( )`. Spaces therefore
//! encode as `%20`, never `+`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use indexmap::IndexMap;
use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;
use percent_encoding::utf8_percent_encode;

// ============================================================================
// SECTION: Encode Set
// ============================================================================

/// Percent-encode set for query components.
///
/// Escapes every byte except ASCII alphanumerics and the unreserved marks
/// `- _ . ! ~ * ' ( )`.
pub const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ============================================================================
// SECTION: Serialization
// ============================================================================

/// Percent-encodes a single query component.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()
}

/// Serializes a parameter map into a query string in insertion order.
///
/// Each key and value is encoded independently; pairs join with `&` and
/// key/value join with `=`. An empty map serializes to the empty string.
#[must_use]
pub fn serialize_query(params: &IndexMap<String, String>) -> String {
    let mut query = String::new();
    for (index, (key, value)) in params.iter().enumerate() {
        if index > 0 {
            query.push('&');
        }
        query.push_str(&encode_component(key));
        query.push('=');
        query.push_str(&encode_component(value));
    }
    query
}
