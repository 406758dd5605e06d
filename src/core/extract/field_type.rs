//! Schema type analysis for builder-call chains.
//!
//! A field type is written as a chain such as `z.string().optional()`:
//!
//! ```text
//! CallExpression                      .optional()
//!   callee: MemberExpression
//!     object: CallExpression          z.string()
//!       callee: MemberExpression
//!         object: Identifier          z
//!         property: Identifier        string
//!     property: Identifier            optional
//! ```
//!
//! The analyzer unwraps the chain down to the innermost call, which names the
//! base kind, and then applies the outer calls as modifiers on the way back.

use tracing::debug;

use super::literal::{callee_name, object_argument, unwrap_expression};
use super::types::FieldType;
use crate::core::syntax::NodeRef;

const OPTIONAL_MODIFIER: &str = "optional";

/// Type information resolved from one builder expression.
#[derive(Debug, Clone, Copy)]
pub struct FieldShape<'a> {
    pub field_type: FieldType,
    pub is_optional: bool,
    /// Top-level kind of the element type for `array` fields.
    pub array_element_type: Option<FieldType>,
    /// The unevaluated property literal of an `object` field.
    pub object_shape: Option<NodeRef<'a>>,
}

impl FieldShape<'_> {
    fn of(field_type: FieldType) -> Self {
        Self {
            field_type,
            is_optional: false,
            array_element_type: None,
            object_shape: None,
        }
    }

    fn unknown() -> Self {
        Self::of(FieldType::Unknown)
    }
}

/// Interprets builder-call chains without executing them.
#[derive(Debug, Clone, Copy)]
pub struct FieldAnalyzer<'o> {
    image_helper: &'o str,
}

impl<'o> FieldAnalyzer<'o> {
    /// `image_helper` names the function that declares a binary asset field.
    pub fn new(image_helper: &'o str) -> Self {
        Self { image_helper }
    }

    pub fn analyze<'a>(&self, node: NodeRef<'a>) -> FieldShape<'a> {
        let call = unwrap_expression(node);
        if !call.is("CallExpression") {
            debug!(kind = call.kind(), "field type is not a call");
            return FieldShape::unknown();
        }
        let Some(callee) = call.child("callee").map(unwrap_expression) else {
            return FieldShape::unknown();
        };
        let Some(method) = callee_name(call) else {
            return FieldShape::unknown();
        };

        match callee.kind() {
            "Identifier" if method == self.image_helper => FieldShape::of(FieldType::Image),
            "MemberExpression" => {
                let receiver = callee.child("object").map(unwrap_expression);
                match receiver {
                    Some(inner) if inner.is("CallExpression") => {
                        let mut shape = self.analyze(inner);
                        if method == OPTIONAL_MODIFIER {
                            shape.is_optional = true;
                        }
                        shape
                    }
                    _ => self.base_kind(method, call),
                }
            }
            _ => {
                debug!(function = method, "unrecognized field helper");
                FieldShape::unknown()
            }
        }
    }

    /// Kind named by the innermost call of a chain (`z.<method>(...)`).
    fn base_kind<'a>(&self, method: &str, call: NodeRef<'a>) -> FieldShape<'a> {
        match method {
            "string" => FieldShape::of(FieldType::String),
            "number" => FieldShape::of(FieldType::Number),
            "boolean" => FieldShape::of(FieldType::Boolean),
            "date" => FieldShape::of(FieldType::Date),
            "array" => {
                let element = call
                    .child_at("arguments", 0)
                    .map(|argument| self.analyze(argument).field_type)
                    .unwrap_or(FieldType::Unknown);
                FieldShape {
                    array_element_type: Some(element),
                    ..FieldShape::of(FieldType::Array)
                }
            }
            "object" => FieldShape {
                object_shape: object_argument(call),
                ..FieldShape::of(FieldType::Object)
            },
            name if name == self.image_helper => FieldShape::of(FieldType::Image),
            other => {
                debug!(method = other, "unrecognized field builder");
                FieldShape::unknown()
            }
        }
    }
}
