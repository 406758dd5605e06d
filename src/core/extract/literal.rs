//! Helper functions for reading ESTree nodes.
//!
//! Pure functions with no state. Nothing here evaluates code: only literal
//! constants and template strings without interpolation have a static value.

use crate::core::syntax::{NodeRef, Scalar};

/// Expression kinds that only wrap an inner `expression` without changing its value.
const TRANSPARENT_WRAPPERS: &[&str] = &[
    "ParenthesizedExpression",
    "TSAsExpression",
    "TSSatisfiesExpression",
    "TSNonNullExpression",
    "TSTypeAssertion",
    "TSInstantiationExpression",
];

/// Unwrap parentheses and TypeScript-only wrappers to get the inner expression.
pub fn unwrap_expression(node: NodeRef<'_>) -> NodeRef<'_> {
    let mut current = node;
    while TRANSPARENT_WRAPPERS.contains(&current.kind()) {
        match current.child("expression") {
            Some(inner) => current = inner,
            None => break,
        }
    }
    current
}

/// Static value of an expression, or `None` when it cannot be known without
/// running code.
pub fn static_value(node: NodeRef<'_>) -> Option<String> {
    let node = unwrap_expression(node);
    match node.kind() {
        "Literal" | "StringLiteral" | "NumericLiteral" | "BooleanLiteral" => {
            if node.field("regex").is_some() {
                return None;
            }
            match node.scalar("value")? {
                Scalar::Null => None,
                value => Some(value.to_text()),
            }
        }
        "TemplateLiteral" => {
            if node.list_len("expressions") > 0 {
                return None;
            }
            node.children("quasis").map(template_text).collect()
        }
        _ => None,
    }
}

fn template_text(quasi: NodeRef<'_>) -> Option<String> {
    let value = quasi.child("value")?;
    value
        .str("cooked")
        .or_else(|| value.str("raw"))
        .map(str::to_string)
}

/// Name of a non-computed property key (`title`, `"title"` or `0`).
pub fn property_key(property: NodeRef<'_>) -> Option<String> {
    if property.bool("computed") {
        return None;
    }
    let key = property.child("key")?;
    match key.kind() {
        "Identifier" => key.str("name").map(str::to_string),
        _ => static_value(key),
    }
}

/// Key/value properties of an object literal, in source order.
///
/// Spreads, methods and computed keys are skipped.
pub fn object_properties<'a>(object: NodeRef<'a>) -> Vec<(String, NodeRef<'a>)> {
    object
        .children("properties")
        .filter(|property| matches!(property.kind(), "Property" | "ObjectProperty"))
        .filter(|property| !property.bool("method"))
        .filter_map(|property| Some((property_key(property)?, property.child("value")?)))
        .collect()
}

/// Name of the invoked function: `glob(...)` gives `glob`, `z.string()` gives `string`.
pub fn callee_name<'a>(call: NodeRef<'a>) -> Option<&'a str> {
    let callee = unwrap_expression(call.child("callee")?);
    match callee.kind() {
        "Identifier" => callee.str("name"),
        "MemberExpression" if !callee.bool("computed") => {
            let property = callee.child("property")?;
            property.str("name")
        }
        _ => None,
    }
}

/// Name of a bare identifier expression.
pub fn identifier_name(node: NodeRef<'_>) -> Option<&str> {
    let node = unwrap_expression(node);
    if node.is("Identifier") {
        node.str("name")
    } else {
        None
    }
}

/// Sole object-literal argument of a call, if the first argument is one.
pub fn object_argument(call: NodeRef<'_>) -> Option<NodeRef<'_>> {
    let argument = unwrap_expression(call.child_at("arguments", 0)?);
    argument.is("ObjectExpression").then_some(argument)
}
