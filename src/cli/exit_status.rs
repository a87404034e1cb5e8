use std::process::ExitCode;

/// Exit status for the lsdoc CLI.
///
/// - `Success` (0): catalog built and written
/// - `Failure` (1): catalog built but the document could not be written
/// - `Error` (2): the run aborted (bad template, relocation failure, ...)
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
