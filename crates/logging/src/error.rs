//! crates/logging/src/error.rs
//!
//! Error types for log instances.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for log instance operations.
pub type LogResult<T> = Result<T, LogError>;

/// Output destination a write failure came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SinkKind {
    /// The log file.
    File,
    /// Standard output.
    Terminal,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "log file",
            Self::Terminal => "terminal",
        })
    }
}

/// Errors produced by a log instance.
///
/// Process termination on [`Severity::Fatal`](logging_sink::Severity::Fatal)
/// is not represented here; it is divergent control flow, not an error value.
#[derive(Debug, Error)]
pub enum LogError {
    /// The destination file could not be created or truncated.
    #[error("failed to open log file {}: {source}", .path.display())]
    Open {
        /// Path passed to initialization.
        path: PathBuf,
        /// Underlying system error.
        #[source]
        source: io::Error,
    },
    /// A sink rejected a record. Only reported by the `try_` emission methods.
    #[error("failed to write record to {sink}: {source}")]
    Write {
        /// Sink whose writer failed.
        sink: SinkKind,
        /// Underlying system error.
        #[source]
        source: io::Error,
    },
}

impl LogError {
    /// Returns the underlying I/O error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Open { source, .. } | Self::Write { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::ErrorKind;

    #[test]
    fn open_error_names_path_and_cause() {
        let err = LogError::Open {
            path: PathBuf::from("/missing/dir/app.log"),
            source: io::Error::new(ErrorKind::NotFound, "no such directory"),
        };

        let text = err.to_string();
        assert!(text.contains("/missing/dir/app.log"));
        assert!(text.contains("no such directory"));
        assert_eq!(err.io_error().kind(), ErrorKind::NotFound);
        assert!(err.source().is_some());
    }

    #[test]
    fn write_error_names_sink() {
        let err = LogError::Write {
            sink: SinkKind::Terminal,
            source: io::Error::new(ErrorKind::BrokenPipe, "closed"),
        };

        assert_eq!(err.to_string(), "failed to write record to terminal: closed");
        assert_eq!(err.io_error().kind(), ErrorKind::BrokenPipe);
    }
}
