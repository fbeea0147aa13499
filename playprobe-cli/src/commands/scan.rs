//! Implementation of the 'scan' subcommand.
//!
//! Discovers media files under a directory, probes them one by one through a
//! single player session, and prints the aggregate report. Per-file failures
//! end up in the report; only a player that cannot be started aborts.

use crate::cli::{PlayerArgs, ScanArgs};
use crate::commands::open_player;
use crate::config::build_probe_config;
use crate::error::{CliErrorContext, CliResult};
use crate::output;

use playprobe_core::{
    AggregateReport, ClassificationVerdict, CoreError, find_media_files, run_batch, summarize,
};
use serde::Serialize;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use log::{debug, info, warn};

/// Machine-readable scan output.
#[derive(Debug, Serialize)]
struct ScanOutput<'a> {
    root: &'a Path,
    interrupted: bool,
    report: &'a AggregateReport,
    files: &'a [ClassificationVerdict],
}

/// Runs the scan command.
pub fn run_scan(args: &ScanArgs, player_args: &PlayerArgs, stop_signal: &AtomicBool) -> CliResult<()> {
    let config = build_probe_config(player_args)?;
    let start = Instant::now();

    let files = match find_media_files(&args.root, &config.media_extensions) {
        Ok(files) => files,
        Err(CoreError::NoFilesFound) => {
            warn!("No media files found under {}", args.root.display());
            Vec::new()
        }
        Err(e) => {
            return Err(e).cli_with_context(|| format!("Cannot scan '{}'", args.root.display()));
        }
    };
    info!("Found {} media file(s) under {}", files.len(), args.root.display());

    let outcome = if files.is_empty() {
        Default::default()
    } else {
        let mut session = open_player(player_args, &config)?;
        let outcome = run_batch(&mut session, &files, &config, stop_signal, |index, verdict| {
            let probe = &verdict.probe_result;
            if probe.succeeded {
                debug!(
                    "[{}/{}] {} -> {}",
                    index + 1,
                    files.len(),
                    probe.file_path.display(),
                    probe.descriptor
                );
            } else {
                warn!(
                    "[{}/{}] {} failed: {}",
                    index + 1,
                    files.len(),
                    probe.file_path.display(),
                    probe.error_message.as_deref().unwrap_or("unknown error")
                );
            }
        });
        session.stop();
        outcome
    };

    let report = summarize(&outcome.verdicts);
    info!(
        "Scan finished in {:.1}s: {} succeeded, {} failed",
        start.elapsed().as_secs_f64(),
        report.succeeded_count,
        report.failed_count
    );

    if args.json {
        output::print_json(&ScanOutput {
            root: &args.root,
            interrupted: outcome.interrupted,
            report: &report,
            files: &outcome.verdicts,
        })
    } else {
        output::print_scan_report(&outcome.verdicts, &report, outcome.interrupted);
        Ok(())
    }
}
