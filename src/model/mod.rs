//! Data model shared by diff results and report generators.
//!
//! These are the building blocks an OpenAPI comparison is expressed in:
//! endpoints keyed by HTTP method and path template, operation parameters,
//! and schema elements located by a structural path. All types are plain
//! read-only data and deserialize from the camelCase JSON produced by the
//! diff computation.

mod endpoint;
mod schema;

pub use endpoint::*;
pub use schema::*;
