// ============================================================================
// playprobe-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses the core error type and adds context to it. Exit codes are
// decided here: a player that cannot be started is a distinct failure from
// every other fatal error.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - CliErrorContext: context helpers for Result and Option
// - exit_code: maps a fatal error to the process exit status

// ---- Internal crate imports ----
use playprobe_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

/// Exit status when the player process could not be started.
pub const EXIT_PROCESS_START: i32 = 2;

/// Exit status for every other fatal error.
pub const EXIT_FAILURE: i32 = 1;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Extension trait for adding context to errors in the CLI.
///
/// Context is prepended to the message. A `ProcessStart` error keeps its
/// variant so that the exit code still reflects it.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;

    /// Add context using a closure (for lazy evaluation).
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

fn with_context(error: CoreError, context: impl fmt::Display) -> CoreError {
    match error {
        CoreError::ProcessStart { command, reason } => CoreError::ProcessStart {
            command,
            reason: format!("{context}: {reason}"),
        },
        other => CoreError::OperationFailed(format!("{context}: {other}")),
    }
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| with_context(e.into(), context))
    }

    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| with_context(e.into(), f()))
    }
}

impl<T> CliErrorContext<T> for Option<T> {
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.ok_or_else(|| CoreError::OperationFailed(context.to_string()))
    }

    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| CoreError::OperationFailed(f().to_string()))
    }
}

/// Process exit status for a fatal error.
pub fn exit_code(error: &CoreError) -> i32 {
    if error.is_fatal() {
        EXIT_PROCESS_START
    } else {
        EXIT_FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_keeps_process_start_variant() {
        let result: CliResult<()> = Err(CoreError::ProcessStart {
            command: "mpv".to_string(),
            reason: "binary not found".to_string(),
        });
        let err = result.cli_context("launching player").unwrap_err();
        assert_eq!(exit_code(&err), EXIT_PROCESS_START);
        assert!(err.to_string().contains("launching player: binary not found"));
    }

    #[test]
    fn test_context_wraps_other_errors() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let err = result.cli_with_context(|| "writing report").unwrap_err();
        assert_eq!(exit_code(&err), EXIT_FAILURE);
        assert!(err.to_string().contains("writing report"));

        let none: Option<u8> = None;
        assert!(none.cli_context("missing value").is_err());
    }
}
