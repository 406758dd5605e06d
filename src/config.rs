use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::ExtractOptions;

pub const CONFIG_FILE_NAME: &str = ".embodirc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Module holding the collection definitions, relative to the project root.
    #[serde(default = "default_config_module")]
    pub config_module: String,
    /// Directory of precomputed `<name>.schema.json` documents.
    #[serde(default = "default_schema_dir")]
    pub schema_dir: String,
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_collection_factory")]
    pub collection_factory: String,
    #[serde(default = "default_collections_export")]
    pub collections_export: String,
    #[serde(default = "default_image_helper")]
    pub image_helper: String,
}

fn default_config_module() -> String {
    "src/content.config.ts".to_string()
}

fn default_schema_dir() -> String {
    ".astro/collections".to_string()
}

fn default_output() -> String {
    ".embodi/cms.config.json".to_string()
}

fn default_collection_factory() -> String {
    "defineCollection".to_string()
}

fn default_collections_export() -> String {
    "collections".to_string()
}

fn default_image_helper() -> String {
    "image".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_module: default_config_module(),
            schema_dir: default_schema_dir(),
            output: default_output(),
            collection_factory: default_collection_factory(),
            collections_export: default_collections_export(),
            image_helper: default_image_helper(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any path or identifier setting is empty.
    pub fn validate(&self) -> Result<()> {
        let settings = [
            ("configModule", &self.config_module),
            ("schemaDir", &self.schema_dir),
            ("output", &self.output),
            ("collectionFactory", &self.collection_factory),
            ("collectionsExport", &self.collections_export),
            ("imageHelper", &self.image_helper),
        ];

        for (key, value) in settings {
            if value.trim().is_empty() {
                bail!("'{}' must not be empty", key);
            }
        }

        Ok(())
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            collection_factory: self.collection_factory.clone(),
            collections_export: self.collections_export.clone(),
            image_helper: self.image_helper.clone(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Location of the loaded file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
