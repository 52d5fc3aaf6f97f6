use std::process::ExitCode;

/// How a `bb2html` invocation ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Conversion finished, zero files included.
    Success,
    /// `--init` found an existing config file.
    Failure,
    /// The run aborted: unreadable source, bad config or I/O failure.
    /// Clap usage errors use the same code.
    Error,
}

impl ExitStatus {
    pub const fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
