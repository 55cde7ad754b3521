// ============================================================================
// soundlab-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for soundlab-core
//
// This module defines the error types used throughout the soundlab-core
// library. Caller-input faults are grouped under `ValidationError` (defined
// next to the guards that raise them) and wrapped by `CoreError::Validation`;
// everything else describes plumbing or external engine failures.
//
// KEY COMPONENTS:
// - CoreError: Main error enum for all library operations
// - CoreResult: Type alias for Result with CoreError
// - Helper functions for creating command-related errors

use crate::edit::ValidationError;

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Main error type for the soundlab-core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The request was rejected before any engine work started.
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("Required dependency '{0}' not found")]
    DependencyNotFound(String),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, io::Error),

    #[error("Failed while waiting for {0}: {1}")]
    CommandWait(String, io::Error),

    /// The engine exited abnormally; the last field carries its diagnostics.
    #[error("{0} failed with {1}:\n{2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("{0} did not produce an output file at {1}")]
    MissingOutput(String, PathBuf),

    #[error("Failed to parse ffprobe output: {0}")]
    FfprobeParse(String),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl CoreError {
    /// True when the error was caused by the caller's input rather than the
    /// environment or the engine.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}

/// Result type for soundlab-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `CommandStart` error for a process that could not be spawned.
pub fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

/// Builds a `CommandWait` error for a process whose exit could not be collected.
pub fn command_wait_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandWait(cmd.into(), err)
}

/// Builds a `CommandFailed` error carrying the process's diagnostic output.
pub fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_flagged() {
        let err: CoreError = ValidationError::EmptySource.into();
        assert!(err.is_validation());
        assert!(err.to_string().starts_with("Invalid request:"));

        let err = CoreError::OperationFailed("boom".to_string());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_command_start_error_message() {
        let err = command_start_error(
            "ffmpeg (export)",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.to_string(), "Failed to start ffmpeg (export): no such file");
    }
}
