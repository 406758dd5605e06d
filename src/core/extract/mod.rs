//! Static extraction of collection definitions.
//!
//! Extraction runs in two passes over one syntax tree:
//!
//! 1. `definitions`: every `const x = defineCollection({...})` is read into a
//!    [`CollectionDefinition`] keyed by its binding name.
//! 2. `exports`: the `export const collections = {...}` mapping selects which
//!    definitions are public and under which name.
//!
//! Pass 2 only reads the finished map of pass 1. No code from the module is
//! ever executed; shapes outside the recognized vocabulary end up as
//! [`FieldType::Unknown`] or unset loader options.

pub mod definitions;
pub mod exports;
pub mod field_type;
pub mod flatten;
pub mod literal;
pub mod loader;
pub mod types;


pub use definitions::{DefinitionMap, collect_definitions};
pub use exports::map_exports;
pub use types::{CollectionDefinition, FieldType, FileLoader, GlobLoader, LoaderConfig, SchemaField};

use crate::core::error::Result;
use crate::core::syntax::SyntaxTree;

/// Names that anchor the analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Function whose bound calls define a collection.
    pub collection_factory: String,
    /// Name of the exported object mapping public names to definitions.
    pub collections_export: String,
    /// Function that declares an image field inside a schema.
    pub image_helper: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            collection_factory: "defineCollection".to_string(),
            collections_export: "collections".to_string(),
            image_helper: "image".to_string(),
        }
    }
}

/// Extract the exported collection definitions of a module, in export order.
pub fn extract_collections(
    tree: &SyntaxTree,
    options: &ExtractOptions,
) -> Result<Vec<CollectionDefinition>> {
    let definitions = collect_definitions(tree, options);
    tracing::debug!(count = definitions.len(), "collected collection definitions");
    map_exports(tree, &definitions, &options.collections_export)
}
