//! Implementation of the 'bench' subcommand.

use crate::cli::{BenchArgs, PlayerArgs};
use crate::commands::{open_player, require_file};
use crate::config::build_probe_config;
use crate::error::{CliErrorContext, CliResult};
use crate::output;

use playprobe_core::FrameStepBenchmark;
use std::sync::atomic::AtomicBool;

/// Runs the frame-step benchmark on one file. A raised `stop_signal` ends
/// the run after the current step; the partial timings are still printed.
pub fn run_bench(args: &BenchArgs, player_args: &PlayerArgs, stop_signal: &AtomicBool) -> CliResult<()> {
    require_file(&args.file)?;
    let config = build_probe_config(player_args)?;

    let mut session = open_player(player_args, &config)?;
    let benchmark = FrameStepBenchmark::new(args.steps, config.settle_delay);
    let result = benchmark.run(&mut session, &args.file, stop_signal);
    session.stop();

    let report = result.cli_context("Frame-step benchmark failed")?;
    output::print_bench_report(&args.file, &report);
    Ok(())
}
