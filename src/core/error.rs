//! Fatal error conditions of the analysis pipeline.
//!
//! Partial extraction (unknown field kinds, unresolved loader values) is not
//! an error and never surfaces here.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CmsError>;

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    /// The module has no `export const <name> = { ... }` statement.
    #[error("collections export `{0}` not found")]
    ExportNotFound(String),

    /// A `$ref` segment or a field path is missing from a schema document.
    #[error("path {0} not found")]
    PathNotFound(String),

    #[error("invalid $ref pointer: {0}")]
    InvalidReference(String),

    #[error("failed to read schema for collection `{collection}` at {}", path.display())]
    SchemaRead {
        collection: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema for collection `{collection}` at {}", path.display())]
    SchemaParse {
        collection: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {path}: {message}")]
    ModuleParse { path: String, message: String },
}
