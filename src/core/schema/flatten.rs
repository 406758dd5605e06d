//! Object field flattening on the schema side.
//!
//! Mirrors the dotted leaves produced by field extraction: nested object
//! properties are lifted to the top level under their dotted path and the
//! object containers are dropped.

use serde_json::{Map, Value};

use super::is_object_type;
use crate::core::error::{CmsError, Result};

/// Lift every nested leaf in `nested_fields` (dotted paths) to a top-level
/// property and remove top-level object-typed properties.
///
/// Non-object properties keep their order and the lifted leaves follow in
/// the order given.
pub fn flatten_objects(schema: &Value, nested_fields: &[&str]) -> Result<Value> {
    let Some(object) = schema.as_object() else {
        return Ok(schema.clone());
    };
    let Some(properties) = object.get("properties").and_then(Value::as_object) else {
        return match nested_fields.first() {
            Some(path) => Err(CmsError::PathNotFound(path.to_string())),
            None => Ok(schema.clone()),
        };
    };

    let mut flattened: Map<String, Value> = properties
        .iter()
        .filter(|(_, value)| !is_object_type(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for path in nested_fields {
        let not_found = || CmsError::PathNotFound(path.to_string());
        let (container, rest) = path.split_once('.').ok_or_else(not_found)?;
        let container = properties.get(container).ok_or_else(not_found)?;
        let leaf = follow_path(container, rest).ok_or_else(not_found)?;
        flattened.insert(path.to_string(), leaf.clone());
    }

    let mut result = object.clone();
    result.insert("properties".to_string(), Value::Object(flattened));
    Ok(Value::Object(result))
}

/// Walk nested `properties` maps along a dotted path.
fn follow_path<'a>(node: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(node, |current, key| current.get("properties")?.get(key))
}
