// outlink-core/src/runtime/mod.rs
// ============================================================================
// Module: Outlink Runtime
// Description: Decoration runtime built on the core types.
// Purpose: Expose the decorator and its query-encoding helpers.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The runtime layer hosts the decorator and the query serialization it
//! relies on. Everything here is pure and synchronous; invocations are fully
//! independent given their inputs.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod decorator;
pub mod encoding;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use decorator::DecorateError;
pub use decorator::LinkDecorator;
pub use encoding::encode_component;
pub use encoding::serialize_query;
