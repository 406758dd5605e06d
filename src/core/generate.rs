//! Assembly of the final CMS configuration document.
//!
//! Each exported glob collection gets its precomputed schema document loaded
//! from `<root>/<schema_dir>/<name>.schema.json`, normalized with the
//! collection's own field list, and packaged with display metadata.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use futures::future::try_join_all;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::error::{CmsError, Result};
use crate::core::extract::{CollectionDefinition, GlobLoader, LoaderConfig};
use crate::core::schema::simplify_schema;

static LOWER_UPPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static CAPITAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").unwrap());
static BRACE_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^}]+)\}").unwrap());
static SINGLE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\w+)(?:\s|$)").unwrap());

pub const SCHEMA_FILE_SUFFIX: &str = ".schema.json";

/// One collection as the CMS sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsCollection {
    pub name: String,
    pub display_name: String,
    pub loader: LoaderConfig,
    pub formats: Vec<String>,
    pub schema: Value,
}

/// Snapshot produced by one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsConfig {
    pub collections: Vec<CmsCollection>,
    /// Epoch milliseconds at generation time.
    pub updated_at: i64,
}

/// Human-readable form of a camelCase collection name.
///
/// `blogPosts` becomes `Blog Posts`, `FAQEntries` becomes `FAQ Entries`.
pub fn display_name(name: &str) -> String {
    let spaced = LOWER_UPPER.replace_all(name, "$1 $2");
    let spaced = CAPITAL_RUN.replace_all(&spaced, "$1 $2");

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// File extensions matched by a glob pattern.
///
/// A brace group (`**/*.{md,mdx}`) lists them; otherwise a single trailing
/// extension (`*.yml`) is used.
pub fn extract_formats(pattern: &str) -> Vec<String> {
    if let Some(group) = BRACE_GROUP.captures(pattern) {
        return group[1]
            .split(',')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(String::from)
            .collect();
    }

    SINGLE_EXTENSION
        .captures(pattern)
        .map(|single| vec![single[1].to_string()])
        .unwrap_or_default()
}

pub fn schema_path(root: &Path, schema_dir: &Path, collection: &str) -> PathBuf {
    root.join(schema_dir)
        .join(format!("{collection}{SCHEMA_FILE_SUFFIX}"))
}

/// Read and parse one collection's schema document.
pub async fn load_schema(root: &Path, schema_dir: &Path, collection: &str) -> Result<Value> {
    let path = schema_path(root, schema_dir, collection);
    debug!(collection, path = %path.display(), "loading schema");

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(source) => {
            return Err(CmsError::SchemaRead {
                collection: collection.to_string(),
                path,
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| CmsError::SchemaParse {
        collection: collection.to_string(),
        path,
        source,
    })
}

/// Package one glob collection.
///
/// Loader values that were not statically readable stay absent from the
/// emitted loader, and a missing pattern yields no formats.
async fn build_collection(
    definition: &CollectionDefinition,
    glob: &GlobLoader,
    root: &Path,
    schema_dir: &Path,
) -> Result<CmsCollection> {
    let raw = load_schema(root, schema_dir, &definition.name).await?;
    let schema = simplify_schema(&raw, definition)?;

    Ok(CmsCollection {
        name: definition.name.clone(),
        display_name: display_name(&definition.name),
        loader: LoaderConfig::Glob(glob.clone()),
        formats: glob
            .pattern
            .as_deref()
            .map(extract_formats)
            .unwrap_or_default(),
        schema,
    })
}

/// Build the CMS configuration for the exported definitions.
///
/// Only glob-loaded collections are included. Schema documents are loaded
/// concurrently; the result keeps the input order and any single failure
/// aborts the whole run.
pub async fn generate_config(
    definitions: &[CollectionDefinition],
    root: &Path,
    schema_dir: &Path,
) -> Result<CmsConfig> {
    let pending = definitions.iter().filter_map(|definition| {
        match definition.glob_loader() {
            Some(glob) => Some(build_collection(definition, glob, root, schema_dir)),
            None => {
                info!(collection = %definition.name, "skipping collection without glob loader");
                None
            }
        }
    });

    let collections = try_join_all(pending).await?;
    let updated_at = chrono::Utc::now().timestamp_millis();
    info!(count = collections.len(), "generated cms config");

    Ok(CmsConfig {
        collections,
        updated_at,
    })
}
