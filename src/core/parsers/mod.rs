//! Source parsers.
//!
//! - `module`: TypeScript/JavaScript configuration module parser (uses swc, lowers to [`crate::core::syntax::SyntaxTree`])

pub mod module;

pub use module::{lower_module, parse_module_source};
