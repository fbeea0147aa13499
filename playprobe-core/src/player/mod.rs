//! Control of the external player process.
//!
//! [`PlayerControl`] is the seam between the probe/benchmark logic and the
//! player: [`PlayerSession`] implements it over the real JSON IPC socket, and
//! `mocks::MockPlayer` (feature `test-mocks`) implements it with scripted
//! responses for tests.

pub mod session;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;

use crate::error::CoreResult;

pub use session::PlayerSession;

/// Property and command names understood by the player.
pub mod names {
    pub const VIDEO_CODEC: &str = "video-codec";
    pub const FILE_FORMAT: &str = "file-format";
    pub const WIDTH: &str = "video-params/w";
    pub const HEIGHT: &str = "video-params/h";
    pub const CONTAINER_FPS: &str = "container-fps";
    pub const VIDEO_PARAMS_FPS: &str = "video-params/fps";
    pub const DURATION: &str = "duration";
    pub const PAUSE: &str = "pause";
    pub const VERSION: &str = "mpv-version";

    pub const LOADFILE: &str = "loadfile";
    pub const FRAME_STEP: &str = "frame-step";
    pub const FRAME_BACK_STEP: &str = "frame-back-step";
    pub const GET_PROPERTY: &str = "get_property";
    pub const SET_PROPERTY: &str = "set_property";
    pub const QUIT: &str = "quit";
}

/// Options for launching a player process.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Player binary (name on `PATH` or path)
    pub process_path: PathBuf,
    /// Bound on launch until the IPC socket answers
    pub startup_timeout: Duration,
    /// Bound on each IPC round trip
    pub request_timeout: Duration,
    /// Start paused instead of autoplaying
    pub pause_on_start: bool,
    /// Run without video or audio output
    pub headless: bool,
    /// Parent directory for the private socket directory
    pub socket_dir: Option<PathBuf>,
}

/// Operations issued against a player, one at a time.
///
/// Every method takes `&mut self`: a player has a single IPC channel and a
/// single "current file", so requests are strictly sequential.
pub trait PlayerControl {
    /// Opens `path`, replacing the current file.
    fn load(&mut self, path: &Path) -> CoreResult<()>;

    /// Reads one property.
    fn get_property(&mut self, name: &str) -> CoreResult<Value>;

    /// Writes one property.
    fn set_property(&mut self, name: &str, value: Value) -> CoreResult<()>;

    /// Runs an arbitrary player command.
    fn send_command(&mut self, name: &str, args: &[Value]) -> CoreResult<Value>;

    /// Steps one frame forward (pauses the player).
    fn frame_step(&mut self) -> CoreResult<()> {
        self.send_command(names::FRAME_STEP, &[]).map(|_| ())
    }

    /// Steps one frame backward (pauses the player).
    fn frame_back_step(&mut self) -> CoreResult<()> {
        self.send_command(names::FRAME_BACK_STEP, &[]).map(|_| ())
    }
}
