//! Configuration structures and constants for the playprobe-core library.
//!
//! This module provides the configuration surface for a probe run: where the
//! player binary lives, how long to wait for it, how long to let a freshly
//! loaded file settle, and which codecs and containers count as unsupported.

mod builder;

use std::path::PathBuf;
use std::time::Duration;

use crate::classification::UnsupportedRuleSet;
use crate::error::{CoreError, CoreResult};
use crate::player::SessionOptions;

pub use builder::ProbeConfigBuilder;

// Default constants

/// Default player binary, resolved through `PATH`.
pub const DEFAULT_PROCESS_PATH: &str = "mpv";

/// Default time allowed for the player to create its IPC socket and answer.
pub const DEFAULT_STARTUP_TIMEOUT_MS: u64 = 5_000;

/// Default bound on any single IPC round trip.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 3_000;

/// Default pause between `loadfile` and the first property read.
/// The player opens files asynchronously; properties are not populated until
/// the demuxer and decoder are up.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

/// Codecs a legacy HTML5-video pipeline could not decode.
pub const DEFAULT_UNSUPPORTED_CODECS: &[&str] = &["h263", "vc1", "wmv3", "msmpeg4v3"];

/// Containers a legacy HTML5-video pipeline could not open.
pub const DEFAULT_UNSUPPORTED_CONTAINER_EXTENSIONS: &[&str] =
    &[".avi", ".mov", ".wmv", ".flv", ".3gp", ".mkv"];

/// Extensions picked up by batch discovery.
pub const DEFAULT_MEDIA_EXTENSIONS: &[&str] = &[
    "mp4", "m4v", "mov", "avi", "mkv", "webm", "wmv", "flv", "3gp", "mpg", "mpeg", "ts",
];

/// Number of frame steps in each direction for the benchmark.
pub const DEFAULT_BENCH_STEPS: usize = 30;

/// Main configuration structure for a probe run.
///
/// Created by the consumer of the library (e.g. playprobe-cli), usually via
/// [`ProbeConfigBuilder`], and handed to the session, probe and batch runner.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Player binary (name on `PATH` or absolute path)
    pub process_path: PathBuf,

    /// Bound on process start until the IPC socket answers
    pub startup_timeout: Duration,

    /// Bound on every IPC round trip
    pub request_timeout: Duration,

    /// Wait between load and property reads
    pub settle_delay: Duration,

    /// Codec identifiers that would require conversion (any dot form)
    pub unsupported_codecs: Vec<String>,

    /// File extensions that would require conversion
    pub unsupported_container_extensions: Vec<String>,

    /// Discovery allow-list, without leading dots
    pub media_extensions: Vec<String>,

    /// Start paused (batch probing) rather than autoplaying
    pub pause_on_start: bool,

    /// Disable video and audio output
    pub headless: bool,

    /// Extra arguments appended to the player command line
    pub extra_args: Vec<String>,

    /// Where to create the IPC socket directory (system temp dir if unset)
    pub socket_dir: Option<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            process_path: PathBuf::from(DEFAULT_PROCESS_PATH),
            startup_timeout: Duration::from_millis(DEFAULT_STARTUP_TIMEOUT_MS),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            unsupported_codecs: to_strings(DEFAULT_UNSUPPORTED_CODECS),
            unsupported_container_extensions: to_strings(DEFAULT_UNSUPPORTED_CONTAINER_EXTENSIONS),
            media_extensions: to_strings(DEFAULT_MEDIA_EXTENSIONS),
            pause_on_start: true,
            headless: true,
            extra_args: Vec::new(),
            socket_dir: None,
        }
    }
}

impl ProbeConfig {
    /// Checks the values a run cannot work without.
    pub fn validate(&self) -> CoreResult<()> {
        if self.process_path.as_os_str().is_empty() {
            return Err(CoreError::Config("player path must not be empty".to_string()));
        }
        if self.startup_timeout.is_zero() {
            return Err(CoreError::Config("startup timeout must be greater than zero".to_string()));
        }
        if self.request_timeout.is_zero() {
            return Err(CoreError::Config("request timeout must be greater than zero".to_string()));
        }
        if self.media_extensions.iter().all(|ext| ext.trim().trim_start_matches('.').is_empty()) {
            return Err(CoreError::Config("at least one media extension is required".to_string()));
        }
        if let Some(dir) = &self.socket_dir {
            if !dir.is_dir() {
                return Err(CoreError::Config(format!(
                    "socket directory '{}' does not exist",
                    dir.display()
                )));
            }
        }
        Ok(())
    }

    /// Builds the immutable rule set used by classification.
    pub fn rule_set(&self) -> UnsupportedRuleSet {
        UnsupportedRuleSet::new(
            &self.unsupported_codecs,
            &self.unsupported_container_extensions,
        )
    }

    /// Options for starting a player session.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            process_path: self.process_path.clone(),
            startup_timeout: self.startup_timeout,
            request_timeout: self.request_timeout,
            pause_on_start: self.pause_on_start,
            headless: self.headless,
            socket_dir: self.socket_dir.clone(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
