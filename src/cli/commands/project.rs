use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::args::CommonArgs;
use crate::config::{Config, load_config};
use crate::core::{CollectionDefinition, extract_collections, parsers::parse_module_source};

/// A project resolved from the command line and the config file.
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Resolve the project root and configuration.
    ///
    /// Without `--root`, the directory holding the discovered config file is
    /// the root, falling back to the working directory.
    pub fn load(args: &CommonArgs) -> Result<Self> {
        let start_dir = match &args.root {
            Some(root) => root.clone(),
            None => env::current_dir().context("Failed to read current directory")?,
        };

        let loaded = load_config(&start_dir)?;
        let root = match (&args.root, &loaded.path) {
            (None, Some(path)) => path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or(start_dir),
            _ => start_dir,
        };

        let mut config = loaded.config;
        if let Some(module) = &args.config_module {
            config.config_module = module.clone();
        }
        config.validate()?;

        debug!(
            root = %root.display(),
            config_file = ?loaded.path,
            "resolved project"
        );

        Ok(Self { root, config })
    }

    pub fn module_path(&self) -> PathBuf {
        self.root.join(&self.config.config_module)
    }

    pub fn schema_dir(&self) -> &Path {
        Path::new(&self.config.schema_dir)
    }

    pub fn output_path(&self, output: Option<&str>) -> PathBuf {
        self.root.join(output.unwrap_or(&self.config.output))
    }

    /// Parse the configuration module and extract its exported collections.
    pub fn extract(&self) -> Result<Vec<CollectionDefinition>> {
        let path = self.module_path();
        let code = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read module: {}", path.display()))?;

        let tree = parse_module_source(code, &path.to_string_lossy())?;
        let collections = extract_collections(&tree, &self.config.extract_options())?;
        debug!(count = collections.len(), "extracted exported collections");

        Ok(collections)
    }
}
