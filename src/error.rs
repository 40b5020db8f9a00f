//! Exit codes.

/// Exit codes for the lsext application.
///
/// - 0: Success (listing printed, possibly empty)
/// - 1: General error (directory could not be listed, output failed)
/// - 2: Usage error (invalid command-line arguments, reported by clap)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: The listing was printed.
    Success = 0,
    /// General error: An unrecoverable error occurred.
    GeneralError = 1,
    /// Usage error: Command-line arguments were rejected.
    UsageError = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Exit code for a command-line parse result that stopped the run.
    ///
    /// `--help` and `--version` are reported by clap as errors but succeed.
    #[must_use]
    pub fn from_clap_error(err: &clap::Error) -> Self {
        if err.use_stderr() {
            Self::UsageError
        } else {
            Self::Success
        }
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "LX000",
            Self::GeneralError => "LX001",
            Self::UsageError => "LX002",
        }
    }
}
