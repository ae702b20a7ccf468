use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): Run completed, or the user declined the prompt
/// - `Failure` (1): Invalid input path or unrecoverable I/O error
/// - `Usage` (2): Invalid command-line arguments
/// - `Interrupted` (130): Stopped by Ctrl+C while files were being processed
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed, or the user declined the prompt.
    Success,
    /// Invalid input path or unrecoverable I/O error.
    Failure,
    /// Invalid command-line arguments.
    Usage,
    /// Stopped by the user during processing.
    Interrupted,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Usage => ExitCode::from(2),
            ExitStatus::Interrupted => ExitCode::from(130),
        }
    }
}
