//! Pass 2: the export mapping.
//!
//! Resolves `export const collections = { blogs: blogsCollection, ... }`
//! against the definitions collected in pass 1.

use tracing::{debug, warn};

use super::definitions::DefinitionMap;
use super::literal::{identifier_name, object_properties, unwrap_expression};
use super::types::CollectionDefinition;
use crate::core::error::{CmsError, Result};
use crate::core::syntax::{NodeRef, SyntaxTree, walk};

/// Exported name to binding name, in source order.
pub type ExportMapping = Vec<(String, String)>;

/// Publish the definitions named by the export mapping.
///
/// Each mapped binding that has a definition is emitted once per exported
/// name, renamed to that exported name. Definitions that are not exported are
/// dropped. Fails when the module has no such export at all.
pub fn map_exports(
    tree: &SyntaxTree,
    definitions: &DefinitionMap,
    export_name: &str,
) -> Result<Vec<CollectionDefinition>> {
    let initializer = find_export(tree, export_name)
        .ok_or_else(|| CmsError::ExportNotFound(export_name.to_string()))?;

    let collections = export_mapping(initializer)
        .into_iter()
        .filter_map(|(exported, binding)| match definitions.get(&binding) {
            Some(definition) => Some(definition.exported_as(&exported)),
            None => {
                debug!(%exported, %binding, "exported value is not a collection definition");
                None
            }
        })
        .collect();

    Ok(collections)
}

/// Initializer of `export const <export_name> = ...`, if the module has one.
fn find_export<'a>(tree: &'a SyntaxTree, export_name: &str) -> Option<NodeRef<'a>> {
    let mut found: Option<NodeRef<'a>> = None;

    walk(tree, |node, _| {
        if found.is_some() || !node.is("ExportNamedDeclaration") {
            return;
        }
        let Some(declaration) = node.child("declaration") else {
            return;
        };
        if !declaration.is("VariableDeclaration") {
            return;
        }
        found = declaration
            .children("declarations")
            .find(|declarator| {
                declarator
                    .child("id")
                    .and_then(identifier_name)
                    .is_some_and(|name| name == export_name)
            })
            .and_then(|declarator| declarator.child("init"));
    });

    found
}

/// Read `{ exported: binding }` pairs; values other than bare identifiers are skipped.
///
/// A repeated exported name takes the later binding but keeps its first position.
pub fn export_mapping(initializer: NodeRef<'_>) -> ExportMapping {
    let object = unwrap_expression(initializer);
    if !object.is("ObjectExpression") {
        warn!(kind = object.kind(), "collections export is not an object literal");
        return Vec::new();
    }

    let mut mapping: ExportMapping = Vec::new();
    for (exported, value) in object_properties(object) {
        let Some(binding) = identifier_name(value) else {
            debug!(%exported, kind = value.kind(), "export value is not an identifier");
            continue;
        };
        match mapping.iter_mut().find(|(name, _)| *name == exported) {
            Some(entry) => {
                warn!(%exported, binding, previous = %entry.1, "collection exported twice");
                entry.1 = binding.to_string();
            }
            None => mapping.push((exported, binding.to_string())),
        }
    }
    mapping
}
