//! Implementation of the 'probe' subcommand.

use crate::cli::{PlayerArgs, ProbeArgs};
use crate::commands::{open_player, require_file};
use crate::config::build_probe_config;
use crate::error::CliResult;
use crate::output;

use playprobe_core::{ClassificationVerdict, classify, probe_file};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Serialize)]
struct ProbeOutput<'a> {
    verdict: &'a ClassificationVerdict,
    classified: bool,
}

/// Probes one file and prints its descriptor and classification.
///
/// A failed probe is reported, not returned as an error. A raised
/// `stop_signal` lets the probe finish; the player is stopped either way.
pub fn run_probe(args: &ProbeArgs, player_args: &PlayerArgs, stop_signal: &AtomicBool) -> CliResult<()> {
    require_file(&args.file)?;
    let config = build_probe_config(player_args)?;

    let mut session = open_player(player_args, &config)?;
    let result = probe_file(&mut session, &args.file, config.settle_delay);
    session.stop();

    if stop_signal.load(Ordering::Relaxed) {
        log::warn!("Interrupted; player shut down");
    }

    let (verdict, classified) = match classify(&result, &config.rule_set()) {
        Ok(verdict) => (verdict, true),
        Err(e) => {
            log::warn!("{}", e);
            (ClassificationVerdict::unclassified(result), false)
        }
    };

    if args.json {
        return output::print_json(&ProbeOutput {
            verdict: &verdict,
            classified,
        });
    }

    output::print_probe_result(&verdict.probe_result);
    if classified {
        output::print_verdict(&verdict);
    }
    Ok(())
}
