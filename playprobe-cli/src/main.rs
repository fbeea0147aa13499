// ============================================================================
// playprobe-cli/src/main.rs
// ============================================================================
//
// PLAYPROBE CLI: Main Entry Point
//
// Parses the command line, sets up logging and colour, dispatches to the
// command, and maps a fatal error to the process exit code: 2 when the player
// could not be started, 1 for anything else.

use clap::Parser;
use owo_colors::OwoColorize;
use playprobe_cli::error::{EXIT_FAILURE, exit_code};
use playprobe_cli::{Cli, Commands, interrupt, logging, output};
use supports_color::Stream;

use std::process;

fn main() {
    let cli = Cli::parse();

    output::set_color(output::detect_color(cli.no_color, Stream::Stdout));
    let stderr_color = output::detect_color(cli.no_color, Stream::Stderr);

    if let Err(e) = logging::init_logging(cli.verbose, cli.log_dir.as_deref(), stderr_color) {
        eprintln!("Error: {e}");
        process::exit(EXIT_FAILURE);
    }

    // Every command may own a player, so a signal must never kill the CLI
    // before the session is stopped.
    let stop_signal = interrupt::install_stop_signal();

    let result = match &cli.command {
        Commands::Scan(args) => playprobe_cli::run_scan(args, &cli.player, &stop_signal),
        Commands::Probe(args) => playprobe_cli::run_probe(args, &cli.player, &stop_signal),
        Commands::Bench(args) => playprobe_cli::run_bench(args, &cli.player, &stop_signal),
    };

    if let Err(e) = result {
        log::debug!("Fatal error: {:?}", e);
        if stderr_color {
            eprintln!("{} {}", "Error:".bright_red().bold(), e);
        } else {
            eprintln!("Error: {e}");
        }
        process::exit(exit_code(&e));
    }
}
