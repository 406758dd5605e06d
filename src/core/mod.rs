//! Analysis engine.
//!
//! - `syntax`: ESTree-shaped syntax tree arena and its pre-order walker
//! - `parsers`: swc front end lowering TypeScript source into that tree
//! - `extract`: static extraction of exported collection definitions
//! - `schema`: normalization of precomputed JSON Schema documents
//! - `generate`: assembly of the final CMS configuration

pub mod error;
pub mod extract;
pub mod generate;
pub mod parsers;
pub mod schema;
pub mod syntax;

pub use error::{CmsError, Result};
pub use extract::{CollectionDefinition, ExtractOptions, extract_collections};
pub use generate::{CmsCollection, CmsConfig, generate_config};
pub use syntax::SyntaxTree;
