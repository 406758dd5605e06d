//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `generate`: Extract collections and write the CMS configuration
//! - `inspect`: Print the extracted collection definitions
//! - `init`: Initialize the embodi configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "embodi", author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Generate(cmd)) => cmd.common.verbose,
            Some(Command::Inspect(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the analysis commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (defaults to the config file's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Content configuration module (overrides config file)
    #[arg(long)]
    pub config_module: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file for the CMS configuration (overrides config file)
    #[arg(long)]
    pub output: Option<String>,
}

#[derive(Debug, Args)]
pub struct InspectCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate the CMS configuration from the content collections
    Generate(GenerateCommand),
    /// Print the collections found in the content configuration module
    Inspect(InspectCommand),
    /// Initialize a new .embodirc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_overrides() {
        let args = Arguments::parse_from([
            "embodi",
            "generate",
            "--root",
            "site",
            "--config-module",
            "src/content/config.ts",
            "--output",
            "dist/cms.json",
            "-v",
        ]);
        let Some(Command::Generate(cmd)) = &args.command else {
            panic!("expected generate command");
        };
        assert_eq!(cmd.common.root, Some(PathBuf::from("site")));
        assert_eq!(
            cmd.common.config_module.as_deref(),
            Some("src/content/config.ts")
        );
        assert_eq!(cmd.output.as_deref(), Some("dist/cms.json"));
        assert!(args.verbose());
    }

    #[test]
    fn test_init_is_not_verbose() {
        let args = Arguments::parse_from(["embodi", "init"]);
        assert!(matches!(args.command, Some(Command::Init)));
        assert!(!args.verbose());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Arguments::command().debug_assert();
    }
}
