/// Errors from the logger selector.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring the logging sinks.
#[derive(Debug, Error)]
pub enum SelectError {
    /// The log file could not be opened for appending.
    #[error("Cannot open log file '{}' for appending", path.display())]
    OpenLogFile {
        /// The path given via `--log-file-path`.
        path: PathBuf,
        /// The underlying file-system error.
        #[source]
        source: std::io::Error,
    },
}

/// Exit code mapping for `SelectError` variants.
impl SelectError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::OpenLogFile { .. } => 2,
        }
    }
}
