use std::process::ExitCode;

/// Exit status of an embodi invocation.
///
/// - `Success` (0): the command finished and wrote its output
/// - `Failure` (1): the command refused to run (e.g. `init` over an existing config)
/// - `Error` (2): analysis or I/O failed (parse error, missing schema, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
