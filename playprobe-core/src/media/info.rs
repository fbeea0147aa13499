use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// What the player reported about a loaded file.
///
/// Every field is optional: each comes from an independent property read
/// that may fail. Absent means unknown, never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaDescriptor {
    /// Video codec name as reported (first token, not canonicalized)
    pub codec: Option<String>,

    /// Container / demuxer name
    pub container: Option<String>,

    /// Frame width in pixels
    pub width: Option<u32>,

    /// Frame height in pixels
    pub height: Option<u32>,

    /// Frames per second (container rate preferred)
    pub frame_rate: Option<f64>,

    /// Duration in seconds
    pub duration_seconds: Option<f64>,
}

impl MediaDescriptor {
    /// Width and height, when both are known.
    pub fn resolution(&self) -> Option<(u32, u32)> {
        Some((self.width?, self.height?))
    }
}

impl fmt::Display for MediaDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unknown = "?";
        write!(
            f,
            "codec={} container={}",
            self.codec.as_deref().unwrap_or(unknown),
            self.container.as_deref().unwrap_or(unknown)
        )?;
        match self.resolution() {
            Some((w, h)) => write!(f, " {w}x{h}")?,
            None => write!(f, " ?x?")?,
        }
        if let Some(fps) = self.frame_rate {
            write!(f, " {fps:.3}fps")?;
        }
        if let Some(duration) = self.duration_seconds {
            write!(f, " {duration:.1}s")?;
        }
        Ok(())
    }
}

/// Outcome of probing one file. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeResult {
    pub file_path: PathBuf,
    pub descriptor: MediaDescriptor,
    /// Wall time from load request to last property read
    pub load_time_millis: u64,
    pub succeeded: bool,
    pub error_message: Option<String>,
}

impl ProbeResult {
    /// A probe that produced a classifiable descriptor.
    pub fn success(file_path: impl Into<PathBuf>, descriptor: MediaDescriptor, load_time_millis: u64) -> Self {
        Self {
            file_path: file_path.into(),
            descriptor,
            load_time_millis,
            succeeded: true,
            error_message: None,
        }
    }

    /// A probe that failed; whatever was read is kept for reporting.
    pub fn failure(
        file_path: impl Into<PathBuf>,
        descriptor: MediaDescriptor,
        load_time_millis: u64,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            descriptor,
            load_time_millis,
            succeeded: false,
            error_message: Some(error_message.into()),
        }
    }

    /// Lowercased file extension with a leading dot, e.g. `".mov"`.
    pub fn extension(&self) -> Option<String> {
        dotted_extension(&self.file_path)
    }
}

/// Lowercased extension of `path` with a leading dot.
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}
