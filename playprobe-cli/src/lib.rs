// playprobe-cli/src/lib.rs
//
// Library portion of the playprobe CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{BenchArgs, Cli, Commands, PlayerArgs, ProbeArgs, ScanArgs};
pub use commands::bench::run_bench;
pub use commands::probe::run_probe;
pub use commands::scan::run_scan;
