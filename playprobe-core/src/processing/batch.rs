// ============================================================================
// playprobe-core/src/processing/batch.rs
// ============================================================================
//
// BATCH RUNNER: Probe -> Classify per File
//
// Files are probed strictly one after another over a single player. The stop
// signal is checked before each file; once it is raised the batch returns
// what it has so far with `interrupted` set.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::classification::{ClassificationVerdict, classify};
use crate::config::ProbeConfig;
use crate::media::probe_file;
use crate::player::PlayerControl;

/// Verdicts produced by a batch, in file order.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub verdicts: Vec<ClassificationVerdict>,
    /// True if the stop signal cut the batch short
    pub interrupted: bool,
}

/// Probes and classifies `files` through `player`.
///
/// `on_verdict` is called with the index and verdict of each file as soon as
/// it is known, for progress display.
pub fn run_batch<P, F>(
    player: &mut P,
    files: &[PathBuf],
    config: &ProbeConfig,
    stop_signal: &AtomicBool,
    mut on_verdict: F,
) -> BatchOutcome
where
    P: PlayerControl + ?Sized,
    F: FnMut(usize, &ClassificationVerdict),
{
    let rules = config.rule_set();
    let mut outcome = BatchOutcome {
        verdicts: Vec::with_capacity(files.len()),
        interrupted: false,
    };

    for (index, path) in files.iter().enumerate() {
        if stop_signal.load(Ordering::Relaxed) {
            log::warn!(
                "Stop requested; {} of {} files left unprobed",
                files.len() - index,
                files.len()
            );
            outcome.interrupted = true;
            break;
        }

        log::info!("[{}/{}] {}", index + 1, files.len(), path.display());
        let probe = probe_file(player, path, config.settle_delay);
        let verdict = match classify(&probe, &rules) {
            Ok(verdict) => verdict,
            Err(e) => {
                log::debug!("{}", e);
                ClassificationVerdict::unclassified(probe)
            }
        };

        on_verdict(index, &verdict);
        outcome.verdicts.push(verdict);
    }

    outcome
}
