//! Error types for the closest-pair core.
//!
//! Every failure in this crate is unrecoverable at its detection point: the
//! detecting process releases what it owns and terminates. Each error class
//! therefore carries a distinct process exit code so that a failure deep in
//! the recursion tree is classifiable from the outermost exit status alone.

use std::process::ExitStatus;
use thiserror::Error;

/// Exit code for malformed input (BSD sysexits `EX_DATAERR`).
pub const EXIT_FORMAT: i32 = 65;
/// Exit code for a usage or configuration error (`EX_USAGE`).
pub const EXIT_USAGE: i32 = 64;
/// Exit code for a failed or misbehaving child process (`EX_SOFTWARE`).
pub const EXIT_CHILD: i32 = 70;
/// Exit code for a resource failure: spawn, executable path, pipe handles (`EX_OSERR`).
pub const EXIT_RESOURCE: i32 = 71;
/// Exit code for a stream read or write failure (`EX_IOERR`).
pub const EXIT_IO: i32 = 74;

/// Main error type for the closest-pair core.
#[derive(Debug, Error)]
pub enum CpairError {
    // Input-format errors
    #[error("line {line}: malformed point (expected \"<x> <y>\"): {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: data after the end-of-input marker: {content:?}")]
    TrailingData { line: usize, content: String },

    // Configuration errors
    #[error("unrecognized engine {0:?} (expected \"process\" or \"in-process\")")]
    UnknownEngine(String),

    // Resource errors
    #[error("failed to resolve own executable path: {source}")]
    ExecutablePath {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to spawn child process: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    #[error("child process {0} handle unavailable")]
    PipeUnavailable(&'static str),

    // Child-process errors
    #[error("child process {pid} failed: {status}")]
    ChildFailed { pid: u32, status: ExitStatus },

    #[error("child result must hold 0 or 2 points, got {count}")]
    ChildResult { count: usize },

    // Stream I/O errors
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl CpairError {
    /// The process exit code this error terminates with.
    ///
    /// One code per class of the failure taxonomy; the outermost process's
    /// status is the only durably observable signal for failures that
    /// originate deeper in the recursion tree.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MalformedLine { .. } | Self::TrailingData { .. } => EXIT_FORMAT,
            Self::UnknownEngine(_) => EXIT_USAGE,
            Self::ExecutablePath { .. } | Self::Spawn { .. } | Self::PipeUnavailable(_) => {
                EXIT_RESOURCE
            }
            Self::ChildFailed { .. } | Self::ChildResult { .. } => EXIT_CHILD,
            Self::Io { .. } => EXIT_IO,
        }
    }

    /// Wrap a stream I/O failure with a short description of the operation.
    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }
}

/// Result type alias for the closest-pair core.
pub type Result<T> = std::result::Result<T, CpairError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinct_per_class() {
        let format = CpairError::MalformedLine {
            line: 1,
            content: "abc".into(),
        };
        let resource = CpairError::PipeUnavailable("stdin");
        let child = CpairError::ChildResult { count: 1 };
        let io = CpairError::io("read standard input", std::io::Error::other("boom"));
        let usage = CpairError::UnknownEngine("threads".into());

        let codes = [
            format.exit_code(),
            resource.exit_code(),
            child.exit_code(),
            io.exit_code(),
            usage.exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_malformed_line_message_names_the_line() {
        let err = CpairError::MalformedLine {
            line: 3,
            content: "1.0 2.0 3.0".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("1.0 2.0 3.0"));
    }
}
