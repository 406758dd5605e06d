//! Date field normalization.
//!
//! Date fields arrive as whatever the schema compiler emits for a date
//! (usually an `anyOf` of string and integer encodings). Every date leaf is
//! replaced by a single `date-time` string schema.

use serde_json::{Map, Value, json};

use super::is_object_type;
use crate::core::error::{CmsError, Result};

/// Schema every date field is rewritten to.
pub fn date_leaf() -> Value {
    json!({ "type": "string", "format": "date-time" })
}

/// Replace the node at each dotted path with [`date_leaf`].
///
/// Each path is followed through nested `properties` maps; every segment
/// before the last must be an object-typed node and the last must exist.
pub fn normalize_dates(schema: &Value, date_fields: &[&str]) -> Result<Value> {
    let mut normalized = schema.clone();

    for path in date_fields {
        let segments: Vec<&str> = path.split('.').collect();
        let properties = normalized
            .get_mut("properties")
            .and_then(Value::as_object_mut)
            .ok_or_else(|| CmsError::PathNotFound(path.to_string()))?;
        replace_at(properties, &segments, path)?;
    }

    Ok(normalized)
}

fn replace_at(properties: &mut Map<String, Value>, segments: &[&str], path: &str) -> Result<()> {
    let not_found = || CmsError::PathNotFound(path.to_string());

    match segments {
        [] => Err(not_found()),
        [leaf] => {
            let slot = properties.get_mut(*leaf).ok_or_else(not_found)?;
            *slot = date_leaf();
            Ok(())
        }
        [first, rest @ ..] => {
            let node = properties
                .get_mut(*first)
                .filter(|node| is_object_type(node))
                .ok_or_else(not_found)?;
            let nested = node
                .get_mut("properties")
                .and_then(Value::as_object_mut)
                .ok_or_else(not_found)?;
            replace_at(nested, rest, path)
        }
    }
}
