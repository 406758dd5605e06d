use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{generate::generate, init::init, inspect::inspect},
    exit_status::ExitStatus,
};
use crate::logging::init_logging;

/// Main entry point for the embodi CLI.
///
/// Installs logging and dispatches to the command handler.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    init_logging(verbose);

    match command {
        Some(Command::Generate(cmd)) => generate(cmd).map(|()| ExitStatus::Success),
        Some(Command::Inspect(cmd)) => inspect(cmd).map(|()| ExitStatus::Success),
        Some(Command::Init) => init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
