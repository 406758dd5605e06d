//! Pass 1: collection definitions.
//!
//! Finds every `const <binding> = defineCollection({ ... })` in the module
//! and reads its loader and schema options.

use std::collections::HashMap;

use tracing::debug;

use super::ExtractOptions;
use super::field_type::FieldAnalyzer;
use super::flatten::flatten_fields;
use super::literal::{callee_name, identifier_name, object_argument, object_properties, unwrap_expression};
use super::loader::parse_loader;
use super::types::{CollectionDefinition, FieldType, SchemaField};
use crate::core::syntax::{NodeRef, SyntaxTree, walk};

/// Definitions keyed by the binding name they were assigned to.
pub type DefinitionMap = HashMap<String, CollectionDefinition>;

/// Collect every collection definition bound to a variable.
///
/// A binding defined twice keeps the later definition.
pub fn collect_definitions(tree: &SyntaxTree, options: &ExtractOptions) -> DefinitionMap {
    let analyzer = FieldAnalyzer::new(&options.image_helper);
    let mut definitions = DefinitionMap::new();

    walk(tree, |node, parent| {
        let Some(declarator) = parent else { return };
        if !is_factory_call(node, declarator, &options.collection_factory) {
            return;
        }
        let Some(binding) = declarator.child("id").and_then(identifier_name) else {
            debug!("collection bound to a destructuring pattern");
            return;
        };
        let Some(config) = object_argument(node) else {
            debug!(binding, "collection config is not an object literal");
            return;
        };

        let definition = parse_collection_config(&analyzer, binding, config);
        if definitions.insert(binding.to_string(), definition).is_some() {
            debug!(binding, "collection redefined, keeping the later definition");
        }
    });

    definitions
}

fn is_factory_call(node: NodeRef<'_>, parent: NodeRef<'_>, factory: &str) -> bool {
    node.is("CallExpression")
        && parent.is("VariableDeclarator")
        && node
            .child("callee")
            .and_then(identifier_name)
            .is_some_and(|name| name == factory)
}

fn parse_collection_config(
    analyzer: &FieldAnalyzer<'_>,
    binding: &str,
    config: NodeRef<'_>,
) -> CollectionDefinition {
    let mut definition = CollectionDefinition {
        name: binding.to_string(),
        loader: None,
        has_schema: false,
        fields: Vec::new(),
    };

    for (key, value) in object_properties(config) {
        match key.as_str() {
            "loader" => definition.loader = parse_loader(value),
            "schema" => {
                definition.has_schema = true;
                definition.fields = schema_fields(analyzer, value);
            }
            _ => {}
        }
    }

    definition
}

/// Flattened fields of a `schema` option, which is either a builder
/// expression or a function returning one.
fn schema_fields(analyzer: &FieldAnalyzer<'_>, value: NodeRef<'_>) -> Vec<SchemaField> {
    let value = unwrap_expression(value);
    let schema = match value.kind() {
        "ArrowFunctionExpression" | "FunctionExpression" => function_result(value),
        _ => Some(value),
    };
    let Some(schema) = schema else {
        debug!("schema function has no return value");
        return Vec::new();
    };

    let shape = analyzer.analyze(schema);
    match (shape.field_type, shape.object_shape) {
        (FieldType::Object, Some(object)) => flatten_fields(analyzer, object, ""),
        (field_type, _) => {
            debug!(
                %field_type,
                builder = callee_name(unwrap_expression(schema)).unwrap_or_default(),
                "schema root is not an object literal"
            );
            Vec::new()
        }
    }
}

/// Expression a function evaluates to: the expression body of an arrow
/// function, or the first top-level `return` of a block body.
fn function_result(function: NodeRef<'_>) -> Option<NodeRef<'_>> {
    let body = function.child("body")?;
    if !body.is("BlockStatement") {
        return Some(body);
    }
    body.children("body")
        .find(|statement| statement.is("ReturnStatement"))
        .and_then(|statement| statement.child("argument"))
}
