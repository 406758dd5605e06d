mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs, GenerateCommand, InspectCommand};
pub use exit_status::ExitStatus;
pub use run::run_cli;
