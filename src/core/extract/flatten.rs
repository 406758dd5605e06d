//! Flattening of nested object fields into dotted-path leaves.

use super::field_type::FieldAnalyzer;
use super::literal::object_properties;
use super::types::{FieldType, SchemaField};
use crate::core::syntax::NodeRef;

/// Flatten the properties of an object-field literal.
///
/// Object-typed properties are never emitted themselves; their leaves are
/// spliced in under `prefix.name`. A property key repeated in the same
/// literal replaces the earlier entry, as it would at runtime.
pub fn flatten_fields(
    analyzer: &FieldAnalyzer<'_>,
    object: NodeRef<'_>,
    prefix: &str,
) -> Vec<SchemaField> {
    let mut fields = Vec::new();
    collect_fields(analyzer, object, prefix, &mut fields);
    fields
}

fn collect_fields(
    analyzer: &FieldAnalyzer<'_>,
    object: NodeRef<'_>,
    prefix: &str,
    fields: &mut Vec<SchemaField>,
) {
    for (key, value) in object_properties(object) {
        let name = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}.{key}")
        };
        let shape = analyzer.analyze(value);

        if shape.field_type == FieldType::Object {
            if let Some(nested) = shape.object_shape {
                collect_fields(analyzer, nested, &name, fields);
            }
            continue;
        }

        let field = SchemaField {
            field_name: name,
            field_type: shape.field_type,
            is_optional: shape.is_optional,
            array_element_type: shape.array_element_type,
        };
        match fields
            .iter_mut()
            .find(|existing| existing.field_name == field.field_name)
        {
            Some(existing) => *existing = field,
            None => fields.push(field),
        }
    }
}
