//! Import of ESTree JSON documents.
//!
//! Any JSON object becomes a node whose kind is its `type` string (empty when
//! absent), arrays become list fields and everything else a scalar. Keys in
//! [`BACK_REFERENCE_FIELDS`] are dropped so a serialized parent link can never
//! turn into an edge of the arena.

use serde_json::Value;

use super::{BACK_REFERENCE_FIELDS, Field, Scalar, SyntaxTree, TreeBuilder, field};

impl SyntaxTree {
    pub fn from_estree(value: &Value) -> SyntaxTree {
        let mut builder = TreeBuilder::new();
        let root = match import_value(&mut builder, value) {
            Field::Node(id) => id,
            other => builder.add("", vec![field("value", other)]),
        };
        builder.finish(root)
    }
}

fn import_value(builder: &mut TreeBuilder, value: &Value) -> Field {
    match value {
        Value::Object(map) => {
            let kind = map.get("type").and_then(Value::as_str).unwrap_or_default();
            let fields: Vec<_> = map
                .iter()
                .filter(|(key, value)| !(key.as_str() == "type" && value.is_string()))
                .filter(|(key, _)| !BACK_REFERENCE_FIELDS.contains(&key.as_str()))
                .map(|(key, value)| field(key, import_value(builder, value)))
                .collect();
            Field::Node(builder.add(kind, fields))
        }
        Value::Array(items) => Field::List(
            items
                .iter()
                .map(|item| import_value(builder, item))
                .collect(),
        ),
        Value::Null => Field::Value(Scalar::Null),
        Value::Bool(b) => Field::Value(Scalar::Bool(*b)),
        Value::Number(n) => Field::Value(Scalar::Number(n.as_f64().unwrap_or_default())),
        Value::String(s) => Field::Value(Scalar::String(s.clone())),
    }
}
