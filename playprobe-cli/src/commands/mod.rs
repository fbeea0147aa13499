//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

use crate::cli::PlayerArgs;
use crate::error::{CliErrorContext, CliResult};

use playprobe_core::{CoreError, PlayerSession, ProbeConfig};
use std::path::Path;

/// Recursive scan, probe and classification of a directory.
pub mod scan;

/// Single-file probe.
pub mod probe;

/// Frame-step latency benchmark.
pub mod bench;

/// Launches a player, or attaches to a running one when `--attach` is given.
pub fn open_player(args: &PlayerArgs, config: &ProbeConfig) -> CliResult<PlayerSession> {
    let session = match &args.attach {
        Some(socket) => PlayerSession::attach(socket, config.request_timeout),
        None => PlayerSession::start(&config.session_options(), &config.extra_args),
    };
    session.cli_context("Player unavailable")
}

/// Fails unless `path` is an existing regular file.
pub fn require_file(path: &Path) -> CliResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CoreError::PathError(format!(
            "'{}' is not a file",
            path.display()
        )))
    }
}
