//! Player session lifecycle.
//!
//! Responsibilities:
//! - Launch the player with a fixed flag set and a private IPC socket
//! - Wait, bounded, until the socket answers a round trip
//! - Issue load / property / command requests with per-request timeouts
//! - Shut the player down on `stop()` and on drop, whatever the exit path
//!
//! A session exclusively owns its child process. Nothing else holds the
//! process handle, so dropping the session is enough to reclaim it.

use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use serde_json::{Value, json};
use tempfile::TempDir;

use super::{PlayerControl, SessionOptions, names};
use crate::error::{CoreError, CoreResult, command_start_error};
use crate::external::{IpcTransport, UnixSocketTransport, resolve_player_binary};

/// Name of the socket file inside the session's private directory.
const SOCKET_FILE_NAME: &str = "ipc.sock";

/// Interval between readiness checks during startup.
const STARTUP_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Bound on the best-effort `quit` request during shutdown.
const QUIT_TIMEOUT: Duration = Duration::from_millis(500);

/// Time the player gets to exit on its own before it is killed.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// A live connection to one external player.
pub struct PlayerSession {
    command: String,
    child: Option<Child>,
    transport: Option<UnixSocketTransport>,
    // Removed (with the socket inside) when dropped.
    socket_dir: Option<TempDir>,
    request_timeout: Duration,
}

impl PlayerSession {
    /// Launches the player and waits until its IPC socket answers.
    ///
    /// Fails with [`CoreError::ProcessStart`] if the binary cannot be found,
    /// exits early, or does not answer within `options.startup_timeout`. The
    /// half-started process is killed before returning the error.
    pub fn start(options: &SessionOptions, extra_args: &[String]) -> CoreResult<Self> {
        let binary = resolve_player_binary(&options.process_path)?;
        let command = binary.display().to_string();

        let socket_dir = create_socket_dir(options.socket_dir.as_deref()).map_err(|e| {
            CoreError::ProcessStart {
                command: command.clone(),
                reason: format!("cannot create IPC socket directory: {e}"),
            }
        })?;
        let socket_path = socket_dir.path().join(SOCKET_FILE_NAME);

        let args = player_args(options, &socket_path, extra_args);
        log::debug!("Starting player: {} {}", command, args.join(" "));

        // Own process group: a terminal Ctrl-C must reach only the CLI, which
        // then shuts the player down through `stop()`.
        let child = Command::new(&binary)
            .args(&args)
            .process_group(0)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| command_start_error(command.clone(), e))?;

        let mut session = Self {
            command: command.clone(),
            child: Some(child),
            transport: None,
            socket_dir: Some(socket_dir),
            request_timeout: options.request_timeout,
        };

        match session.wait_until_ready(&socket_path, options.startup_timeout) {
            Ok(transport) => {
                session.transport = Some(transport);
                Ok(session)
            }
            Err(reason) => {
                log::error!("Player '{}' failed to become ready: {}", command, reason);
                session.stop();
                Err(CoreError::ProcessStart { command, reason })
            }
        }
    }

    /// Connects to a player that is already running and listening on
    /// `socket_path`. The session does not own that process: `stop()` only
    /// closes the connection.
    pub fn attach(socket_path: &Path, request_timeout: Duration) -> CoreResult<Self> {
        let transport = UnixSocketTransport::connect(socket_path).map_err(|e| {
            CoreError::ProcessStart {
                command: socket_path.display().to_string(),
                reason: format!("cannot connect to IPC socket: {e}"),
            }
        })?;
        log::debug!("Attached to player socket {}", socket_path.display());
        Ok(Self {
            command: socket_path.display().to_string(),
            child: None,
            transport: Some(transport),
            socket_dir: None,
            request_timeout,
        })
    }

    /// Process id of the owned player; `None` for attached sessions or once
    /// stopped.
    pub fn process_id(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    /// Whether the session can still issue requests.
    pub fn is_alive(&mut self) -> bool {
        if self.transport.is_none() {
            return false;
        }
        match self.child.as_mut().map(Child::try_wait) {
            None | Some(Ok(None)) => true,
            Some(Ok(Some(status))) => {
                log::warn!("Player '{}' exited unexpectedly ({})", self.command, status);
                false
            }
            Some(Err(e)) => {
                log::warn!("Cannot query player '{}' status: {}", self.command, e);
                false
            }
        }
    }

    /// Shuts the player down. Safe to call any number of times.
    pub fn stop(&mut self) {
        if let Some(mut transport) = self.transport.take() {
            if self.child.is_some() {
                // The player usually closes the socket before replying.
                if let Err(e) = transport.request(&[json!(names::QUIT)], QUIT_TIMEOUT) {
                    log::debug!("quit request to '{}' ended with: {}", self.command, e);
                }
            }
        }

        if let Some(mut child) = self.child.take() {
            let deadline = Instant::now() + SHUTDOWN_GRACE;
            loop {
                match child.try_wait() {
                    Ok(Some(status)) => {
                        log::debug!("Player '{}' exited ({})", self.command, status);
                        break;
                    }
                    Ok(None) if Instant::now() < deadline => thread::sleep(STARTUP_POLL_INTERVAL),
                    Ok(None) | Err(_) => {
                        log::warn!("Player '{}' did not exit; killing it", self.command);
                        if let Err(e) = child.kill() {
                            log::warn!("Failed to kill player '{}': {}", self.command, e);
                        }
                        if let Err(e) = child.wait() {
                            log::warn!("Failed to reap player '{}': {}", self.command, e);
                        }
                        break;
                    }
                }
            }
        }

        self.socket_dir.take();
    }

    fn wait_until_ready(
        &mut self,
        socket_path: &Path,
        startup_timeout: Duration,
    ) -> Result<UnixSocketTransport, String> {
        let deadline = Instant::now() + startup_timeout;

        loop {
            if let Some(child) = self.child.as_mut() {
                match child.try_wait() {
                    Ok(Some(status)) => return Err(format!("player exited during startup ({status})")),
                    Ok(None) => {}
                    Err(e) => return Err(format!("cannot query player status: {e}")),
                }
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(format!(
                    "IPC socket not ready within {} ms",
                    startup_timeout.as_millis()
                ));
            }

            if socket_path.exists() {
                match UnixSocketTransport::connect(socket_path) {
                    Ok(mut transport) => {
                        let handshake = [json!(names::GET_PROPERTY), json!(names::VERSION)];
                        match transport.request(&handshake, remaining) {
                            Ok(version) => {
                                log::info!("Player ready: {}", version.as_str().unwrap_or("unknown version"));
                                return Ok(transport);
                            }
                            Err(e) => log::debug!("Handshake with player failed: {}", e),
                        }
                    }
                    Err(e) => log::trace!("IPC socket not accepting yet: {}", e),
                }
            }

            thread::sleep(STARTUP_POLL_INTERVAL.min(remaining));
        }
    }

    fn request(&mut self, command: &[Value]) -> CoreResult<Value> {
        let timeout = self.request_timeout;
        let transport = self.transport.as_mut().ok_or(CoreError::SessionClosed)?;
        transport.request(command, timeout)
    }
}

impl PlayerControl for PlayerSession {
    fn load(&mut self, path: &Path) -> CoreResult<()> {
        let target = path.to_string_lossy();
        self.request(&[json!(names::LOADFILE), json!(target), json!("replace")])
            .map(|_| ())
            .map_err(|e| CoreError::Load {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    fn get_property(&mut self, name: &str) -> CoreResult<Value> {
        self.request(&[json!(names::GET_PROPERTY), json!(name)])
            .map_err(|e| CoreError::Property {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }

    fn set_property(&mut self, name: &str, value: Value) -> CoreResult<()> {
        self.request(&[json!(names::SET_PROPERTY), json!(name), value])
            .map(|_| ())
            .map_err(|e| CoreError::Property {
                name: name.to_string(),
                reason: e.to_string(),
            })
    }

    fn send_command(&mut self, name: &str, args: &[Value]) -> CoreResult<Value> {
        let mut command = Vec::with_capacity(args.len() + 1);
        command.push(json!(name));
        command.extend_from_slice(args);
        self.request(&command).map_err(|e| CoreError::Command {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }
}

impl Drop for PlayerSession {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The documented flag set, in order, followed by the caller's extras.
pub fn player_args(options: &SessionOptions, socket_path: &Path, extra_args: &[String]) -> Vec<String> {
    let mut args = vec![
        "--idle=yes".to_string(),
        "--no-terminal".to_string(),
        "--force-window=no".to_string(),
        format!("--input-ipc-server={}", socket_path.display()),
        if options.pause_on_start { "--pause=yes" } else { "--pause=no" }.to_string(),
    ];
    if options.headless {
        args.push("--vo=null".to_string());
        args.push("--ao=null".to_string());
    }
    args.extend(extra_args.iter().cloned());
    args
}

fn create_socket_dir(parent: Option<&Path>) -> std::io::Result<TempDir> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("playprobe-");
    match parent {
        Some(dir) => builder.tempdir_in(dir),
        None => builder.tempdir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn options(pause: bool, headless: bool) -> SessionOptions {
        SessionOptions {
            process_path: PathBuf::from("mpv"),
            startup_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(1),
            pause_on_start: pause,
            headless,
            socket_dir: None,
        }
    }

    #[test]
    fn test_player_args_batch_mode() {
        let args = player_args(&options(true, true), Path::new("/tmp/x/ipc.sock"), &[]);
        assert_eq!(
            args,
            vec![
                "--idle=yes",
                "--no-terminal",
                "--force-window=no",
                "--input-ipc-server=/tmp/x/ipc.sock",
                "--pause=yes",
                "--vo=null",
                "--ao=null",
            ]
        );
    }

    #[test]
    fn test_player_args_interactive_with_extras() {
        let extras = vec!["--hwdec=auto".to_string()];
        let args = player_args(&options(false, false), Path::new("/s"), &extras);
        assert!(args.contains(&"--pause=no".to_string()));
        assert!(!args.contains(&"--vo=null".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("--hwdec=auto"));
    }
}
