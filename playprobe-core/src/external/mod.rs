// ============================================================================
// playprobe-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the External Player Process
//
// This module encapsulates everything that touches the outside world on the
// player's behalf: locating the player binary and the JSON IPC channel used to
// talk to it once it is running.
//
// KEY COMPONENTS:
// - IpcTransport trait and its Unix socket implementation
// - Player binary resolution

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::path::{Path, PathBuf};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Newline-delimited JSON request/response channel
pub mod ipc;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ipc::{IpcTransport, UnixSocketTransport};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Resolves the player binary to an executable path.
///
/// Bare names are looked up on `PATH`; paths containing a separator are
/// checked as given.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The resolved executable
/// * `Err(CoreError::ProcessStart)` - If no executable could be found
pub fn resolve_player_binary(process_path: &Path) -> CoreResult<PathBuf> {
    match which::which(process_path) {
        Ok(resolved) => {
            log::debug!(
                "Resolved player '{}' to {}",
                process_path.display(),
                resolved.display()
            );
            Ok(resolved)
        }
        Err(e) => {
            log::warn!("Player binary '{}' not found: {}", process_path.display(), e);
            Err(CoreError::ProcessStart {
                command: process_path.display().to_string(),
                reason: format!("binary not found ({e})"),
            })
        }
    }
}
