// playprobe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use playprobe_core::config::{
    DEFAULT_BENCH_STEPS, DEFAULT_PROCESS_PATH, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_SETTLE_DELAY_MS,
    DEFAULT_STARTUP_TIMEOUT_MS,
};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "playprobe: media player capability probe and benchmark",
    long_about = "Probes media files through an mpv player over its JSON IPC socket, \
                  reports load latency and media properties, and flags files a legacy \
                  HTML5-video pipeline would have had to transcode."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub player: PlayerArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Also write the log to a timestamped file in this directory
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probes and classifies every media file under a directory
    Scan(ScanArgs),
    /// Probes a single file and prints its descriptor
    Probe(ProbeArgs),
    /// Measures frame-step latency on a single file
    Bench(BenchArgs),
}

/// Options shared by every command that talks to the player.
#[derive(Args, Debug)]
pub struct PlayerArgs {
    /// Player binary (name on PATH or full path)
    #[arg(long = "mpv", global = true, value_name = "PATH", env = "PLAYPROBE_MPV", default_value = DEFAULT_PROCESS_PATH)]
    pub mpv: PathBuf,

    /// Connect to an already running player on this IPC socket instead of launching one
    #[arg(long, global = true, value_name = "SOCKET")]
    pub attach: Option<PathBuf>,

    /// Bound on player startup, in milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = DEFAULT_STARTUP_TIMEOUT_MS)]
    pub startup_timeout_ms: u64,

    /// Bound on each IPC request, in milliseconds
    #[arg(long, global = true, value_name = "MS", default_value_t = DEFAULT_REQUEST_TIMEOUT_MS)]
    pub request_timeout_ms: u64,

    /// Wait after each load before reading properties, in milliseconds
    #[arg(long, global = true, value_name = "MS", env = "PLAYPROBE_SETTLE_MS", default_value_t = DEFAULT_SETTLE_DELAY_MS)]
    pub settle_ms: u64,

    /// Unsupported codec (repeatable; replaces the default list)
    #[arg(long = "unsupported-codec", global = true, value_name = "CODEC")]
    pub unsupported_codecs: Vec<String>,

    /// Unsupported container extension (repeatable; replaces the default list)
    #[arg(long = "unsupported-ext", global = true, value_name = "EXT")]
    pub unsupported_extensions: Vec<String>,

    /// Comma-separated media extensions to scan for
    #[arg(long, global = true, value_delimiter = ',', value_name = "EXTS")]
    pub extensions: Option<Vec<String>>,

    /// Start playback instead of starting paused
    #[arg(long, global = true)]
    pub autoplay: bool,

    /// Keep video and audio output enabled
    #[arg(long, global = true)]
    pub show_video: bool,

    /// Extra argument passed to the player (repeatable)
    #[arg(long = "player-arg", global = true, value_name = "ARG", allow_hyphen_values = true)]
    pub player_args: Vec<String>,

    /// Directory in which to create the private IPC socket
    #[arg(long, global = true, value_name = "DIR")]
    pub socket_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory to scan recursively
    #[arg(required = true, value_name = "ROOT")]
    pub root: PathBuf,

    /// Print the aggregate report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Media file to probe
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    /// Print the probe result as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Media file to step through
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    /// Frame steps in each direction
    #[arg(long, value_name = "N", default_value_t = DEFAULT_BENCH_STEPS)]
    pub steps: usize,
}
