//! `$ref` pointer resolution.

use serde_json::{Map, Value};

use crate::core::error::{CmsError, Result};

pub const REF_KEY: &str = "$ref";

/// Inline the target of a root-level `#/a/b` pointer.
///
/// Starting from the node without its `$ref`, each segment in turn is looked
/// up on the accumulated object, removed from it, and its own keys are merged
/// in (replacing keys of the same name). Nodes without `$ref` are returned
/// unchanged.
pub fn resolve_ref(schema: &Value) -> Result<Value> {
    let Some(object) = schema.as_object() else {
        return Ok(schema.clone());
    };
    let Some(pointer) = object.get(REF_KEY) else {
        return Ok(schema.clone());
    };
    let pointer = pointer
        .as_str()
        .ok_or_else(|| CmsError::InvalidReference(pointer.to_string()))?;

    let mut segments = pointer.split('/');
    if segments.next() != Some("#") {
        return Err(CmsError::InvalidReference(pointer.to_string()));
    }

    let mut resolved: Map<String, Value> = object.clone();
    resolved.shift_remove(REF_KEY);

    for segment in segments.map(unescape) {
        let target = resolved
            .shift_remove(&segment)
            .ok_or_else(|| CmsError::PathNotFound(pointer.to_string()))?;
        let Value::Object(target) = target else {
            return Err(CmsError::InvalidReference(format!(
                "{pointer} does not point to an object"
            )));
        };
        for (key, value) in target {
            resolved.insert(key, value);
        }
    }

    Ok(Value::Object(resolved))
}

/// Decode JSON Pointer escapes (`~1` is `/`, `~0` is `~`).
fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
