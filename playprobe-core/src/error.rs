// ============================================================================
// playprobe-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error Types for the playprobe Core Library
//
// Only `ProcessStart` is fatal to a run. Load, property and command failures
// are recorded per file by the probe and never escape the probe boundary.
// `Timeout` is raised by the IPC transport and folded into the failure of the
// operation that was waiting on it.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Custom error types for playprobe
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to start player '{command}': {reason}")]
    ProcessStart { command: String, reason: String },

    #[error("Failed to load '{}': {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    #[error("Property '{name}' unavailable: {reason}")]
    Property { name: String, reason: String },

    #[error("Command '{name}' failed: {reason}")]
    Command { name: String, reason: String },

    #[error("Cannot classify '{}': {reason}", path.display())]
    Classification { path: PathBuf, reason: String },

    #[error("{operation} timed out after {timeout_ms} ms")]
    Timeout { operation: String, timeout_ms: u64 },

    #[error("IPC protocol error: {0}")]
    Ipc(String),

    #[error("Player session is closed")]
    SessionClosed,

    #[error("Path error: {0}")]
    PathError(String),

    #[error("No media files found")]
    NoFilesFound,

    #[error("Directory traversal error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for playprobe operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Builds a `ProcessStart` error from a spawn failure, naming the binary.
pub fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    let command = command.into();
    let reason = if err.kind() == io::ErrorKind::NotFound {
        "binary not found".to_string()
    } else {
        err.to_string()
    };
    CoreError::ProcessStart { command, reason }
}

/// Builds a `Timeout` error for an operation bounded by `timeout`.
pub fn timeout_error(operation: impl Into<String>, timeout: Duration) -> CoreError {
    CoreError::Timeout {
        operation: operation.into(),
        timeout_ms: timeout.as_millis() as u64,
    }
}

impl CoreError {
    /// True for the one error class that aborts a whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CoreError::ProcessStart { .. })
    }
}
