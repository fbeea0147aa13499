//! Core library for benchmarking and capability-probing an external media
//! player (mpv) over its JSON IPC socket.
//!
//! This crate launches and controls a player session, probes media files
//! through it, classifies whether each file would have required transcoding
//! under a legacy HTML5-video pipeline, and aggregates the results.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use playprobe_core::{PlayerSession, ProbeConfigBuilder, find_media_files, run_batch, summarize};
//! use std::path::Path;
//! use std::sync::atomic::AtomicBool;
//!
//! let config = ProbeConfigBuilder::new().build().unwrap();
//! let files = find_media_files(Path::new("/srv/media"), &config.media_extensions).unwrap();
//!
//! let mut session = PlayerSession::start(&config.session_options(), &config.extra_args).unwrap();
//! let stop = AtomicBool::new(false);
//! let outcome = run_batch(&mut session, &files, &config, &stop, |_, _| {});
//! session.stop();
//!
//! let report = summarize(&outcome.verdicts);
//! println!("{} of {} would have needed conversion", report.conversions_avoided, report.total);
//! ```

pub mod benchmark;
pub mod classification;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod media;
pub mod mocks;
pub mod player;
pub mod processing;
pub mod reporting;
pub mod utils;

// Re-exports for public API
pub use benchmark::{FrameStepBenchmark, FrameStepReport, TimingStats};
pub use classification::{
    ClassificationVerdict, ConversionReason, UnsupportedRuleSet, canonicalize_codec,
    canonicalize_extension, classify,
};
pub use config::{ProbeConfig, ProbeConfigBuilder};
pub use discovery::find_media_files;
pub use error::{CoreError, CoreResult};
pub use media::{MediaDescriptor, ProbeResult, probe_file};
pub use player::{PlayerControl, PlayerSession, SessionOptions};
pub use processing::{BatchOutcome, run_batch};
pub use reporting::{AggregateReport, FailedProbe, summarize};
pub use utils::{format_duration_secs, format_fps, format_millis, format_resolution};
