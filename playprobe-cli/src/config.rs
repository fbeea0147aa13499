// playprobe-cli/src/config.rs
//
// Turns the shared player options into a validated core `ProbeConfig`.
// Lists given on the command line replace the library defaults; omitted
// lists keep them.

use crate::cli::PlayerArgs;
use crate::error::CliResult;

use playprobe_core::{ProbeConfig, ProbeConfigBuilder};
use std::time::Duration;

/// Builds the probe configuration for a run.
pub fn build_probe_config(args: &PlayerArgs) -> CliResult<ProbeConfig> {
    let mut builder = ProbeConfigBuilder::new()
        .process_path(args.mpv.clone())
        .startup_timeout(Duration::from_millis(args.startup_timeout_ms))
        .request_timeout(Duration::from_millis(args.request_timeout_ms))
        .settle_delay(Duration::from_millis(args.settle_ms))
        .pause_on_start(!args.autoplay)
        .headless(!args.show_video)
        .extra_args(args.player_args.iter().cloned());

    if !args.unsupported_codecs.is_empty() {
        builder = builder.unsupported_codecs(args.unsupported_codecs.iter().cloned());
    }
    if !args.unsupported_extensions.is_empty() {
        builder = builder.unsupported_container_extensions(args.unsupported_extensions.iter().cloned());
    }
    if let Some(extensions) = &args.extensions {
        builder = builder.media_extensions(extensions.iter().cloned());
    }
    if let Some(dir) = &args.socket_dir {
        builder = builder.socket_dir(dir.clone());
    }

    builder.build()
}
