use std::process::ExitCode;

/// Process exit status of an `lwc-labels` run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Labels were generated, or `init` created the config file (0).
    Success,
    /// Nothing was written: the component or its template is missing, the
    /// overwrite was declined, or `init` found an existing config (1).
    Failure,
    /// The run failed: unreadable or invalid config, unsupported naming
    /// style, closed input, or an I/O error while writing outputs (2).
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
