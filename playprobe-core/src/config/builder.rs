// ============================================================================
// playprobe-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for ProbeConfig
//
// Fluent construction of ProbeConfig with defaults for everything, and
// validation at build time.

// ---- Standard library imports ----
use std::path::PathBuf;
use std::time::Duration;

// ---- Internal crate imports ----
use super::ProbeConfig;
use crate::error::CoreResult;

/// Builder for creating ProbeConfig instances.
///
/// # Examples
///
/// ```rust
/// use playprobe_core::config::ProbeConfigBuilder;
/// use std::time::Duration;
///
/// let config = ProbeConfigBuilder::new()
///     .process_path("/usr/bin/mpv")
///     .settle_delay(Duration::from_millis(250))
///     .unsupported_codecs(["h263", "vc1"])
///     .unsupported_container_extensions([".avi", ".mov"])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.settle_delay, Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProbeConfigBuilder {
    config: ProbeConfig,
}

impl ProbeConfigBuilder {
    /// Creates a new builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the player binary.
    pub fn process_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.process_path = path.into();
        self
    }

    /// Sets the startup timeout.
    pub fn startup_timeout(mut self, timeout: Duration) -> Self {
        self.config.startup_timeout = timeout;
        self
    }

    /// Sets the per-request IPC timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Sets the settle delay between load and property reads.
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.config.settle_delay = delay;
        self
    }

    /// Replaces the unsupported codec list.
    pub fn unsupported_codecs<I, S>(mut self, codecs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.unsupported_codecs = codecs.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the unsupported container extension list.
    pub fn unsupported_container_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.unsupported_container_extensions =
            extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the discovery extension allow-list.
    pub fn media_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.media_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Chooses pause-on-start (true) or autoplay (false).
    pub fn pause_on_start(mut self, pause: bool) -> Self {
        self.config.pause_on_start = pause;
        self
    }

    /// Disables (true) or keeps (false) video and audio output.
    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    /// Appends extra player arguments.
    pub fn extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extra_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the parent directory for the IPC socket.
    pub fn socket_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.socket_dir = Some(dir.into());
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> CoreResult<ProbeConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
