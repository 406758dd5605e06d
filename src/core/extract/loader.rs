//! Loader descriptor parsing.
//!
//! `glob({ pattern, base })` and `file(path)` are the only loaders that are
//! understood. Each option goes through [`static_value`]; options whose value
//! is only known at runtime are left unset.

use tracing::debug;

use super::literal::{callee_name, object_properties, static_value, unwrap_expression};
use super::types::{FileLoader, GlobLoader, LoaderConfig};
use crate::core::syntax::NodeRef;

pub const GLOB_LOADER: &str = "glob";
pub const FILE_LOADER: &str = "file";

/// Parse the value of a collection's `loader` option.
pub fn parse_loader(node: NodeRef<'_>) -> Option<LoaderConfig> {
    let call = unwrap_expression(node);
    if !call.is("CallExpression") {
        debug!(kind = call.kind(), "loader is not a call expression");
        return None;
    }

    let name = callee_name(call)?;
    let argument = call.child_at("arguments", 0).map(unwrap_expression);

    match name {
        GLOB_LOADER => {
            let mut glob = GlobLoader::default();
            for (key, value) in argument.map(options).unwrap_or_default() {
                match key.as_str() {
                    "pattern" => glob.pattern = resolve(&key, value),
                    "base" => glob.base = resolve(&key, value),
                    _ => {}
                }
            }
            Some(LoaderConfig::Glob(glob))
        }
        FILE_LOADER => {
            let mut file = FileLoader::default();
            match argument {
                Some(arg) if arg.is("ObjectExpression") => {
                    for (key, value) in options(arg) {
                        if key == "path" {
                            file.path = resolve(&key, value);
                        }
                    }
                }
                Some(arg) => file.path = resolve("path", arg),
                None => {}
            }
            Some(LoaderConfig::File(file))
        }
        other => {
            debug!(loader = other, "unrecognized loader");
            None
        }
    }
}

fn options(argument: NodeRef<'_>) -> Vec<(String, NodeRef<'_>)> {
    if argument.is("ObjectExpression") {
        object_properties(argument)
    } else {
        Vec::new()
    }
}

fn resolve(key: &str, value: NodeRef<'_>) -> Option<String> {
    let resolved = static_value(value);
    if resolved.is_none() {
        debug!(option = key, kind = value.kind(), "loader option is not static");
    }
    resolved
}
