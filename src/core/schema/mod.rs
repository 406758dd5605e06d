//! Schema document normalization.
//!
//! The per-collection JSON Schema produced by the schema compiler is turned
//! into the flat shape the CMS consumes, in three steps:
//!
//! 1. `reference`: inline the root `$ref` pointer
//! 2. `dates`: rewrite date fields to a single `date-time` string schema
//! 3. `flatten`: lift nested object leaves to dotted top-level properties
//!
//! Every step returns a new document; the input is never modified.

pub mod dates;
pub mod flatten;
pub mod reference;

pub use dates::normalize_dates;
pub use flatten::flatten_objects;
pub use reference::resolve_ref;

use serde_json::Value;

use crate::core::error::Result;
use crate::core::extract::CollectionDefinition;

/// True for nodes declaring `"type": "object"`.
pub fn is_object_type(node: &Value) -> bool {
    node.get("type").and_then(Value::as_str) == Some("object")
}

/// Normalize a collection's schema document using its extracted fields.
pub fn simplify_schema(schema: &Value, collection: &CollectionDefinition) -> Result<Value> {
    let resolved = resolve_ref(schema)?;
    let dated = normalize_dates(&resolved, &collection.date_fields())?;
    flatten_objects(&dated, &collection.nested_fields())
}
