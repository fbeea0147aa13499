// ============================================================================
// playprobe-core/src/benchmark.rs
// ============================================================================
//
// FRAME-STEP BENCHMARK: Latency of Single-Frame Stepping
//
// Loads one file, pauses it, then issues a fixed number of forward and
// backward frame steps, timing each command round trip. A failed step is
// counted and skipped; only a failed load aborts the benchmark. The stop
// signal is checked before every step; a stopped run keeps what it measured.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreResult;
use crate::player::{PlayerControl, names};

/// Accumulated timings for one kind of operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    pub samples: usize,
    pub min_ms: f64,
    pub max_ms: f64,
    total_ms: f64,
}

impl TimingStats {
    /// Adds one measured duration.
    pub fn record(&mut self, elapsed: Duration) {
        let ms = elapsed.as_secs_f64() * 1000.0;
        if self.samples == 0 {
            self.min_ms = ms;
            self.max_ms = ms;
        } else {
            self.min_ms = self.min_ms.min(ms);
            self.max_ms = self.max_ms.max(ms);
        }
        self.total_ms += ms;
        self.samples += 1;
    }

    /// Mean in milliseconds; 0 with no samples.
    pub fn mean_ms(&self) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.total_ms / self.samples as f64
        }
    }
}

/// Result of a frame-step benchmark run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameStepReport {
    pub forward: TimingStats,
    pub backward: TimingStats,
    pub failed_steps: usize,
    /// Stopped early by the stop signal
    pub interrupted: bool,
}

/// Frame-step benchmark parameters.
#[derive(Debug, Clone)]
pub struct FrameStepBenchmark {
    /// Steps in each direction
    pub steps: usize,
    /// Wait after load before the first step
    pub settle_delay: Duration,
}

impl FrameStepBenchmark {
    pub fn new(steps: usize, settle_delay: Duration) -> Self {
        Self { steps, settle_delay }
    }

    /// Runs the benchmark on `file_path`, stopping early once `stop_signal`
    /// is raised.
    ///
    /// # Errors
    ///
    /// Returns the load error if the file cannot be opened.
    pub fn run<P>(
        &self,
        player: &mut P,
        file_path: &Path,
        stop_signal: &AtomicBool,
    ) -> CoreResult<FrameStepReport>
    where
        P: PlayerControl + ?Sized,
    {
        player.load(file_path)?;
        if !self.settle_delay.is_zero() {
            thread::sleep(self.settle_delay);
        }
        if let Err(e) = player.set_property(names::PAUSE, Value::Bool(true)) {
            log::warn!("Could not pause before stepping: {}", e);
        }

        let mut report = FrameStepReport::default();

        for backward in [false, true] {
            for _ in 0..self.steps {
                if stop_signal.load(Ordering::Relaxed) {
                    log::warn!("Frame-step benchmark stopped early");
                    report.interrupted = true;
                    return Ok(report);
                }
                let start = Instant::now();
                let stepped = if backward {
                    player.frame_back_step()
                } else {
                    player.frame_step()
                };
                match stepped {
                    Ok(()) if backward => report.backward.record(start.elapsed()),
                    Ok(()) => report.forward.record(start.elapsed()),
                    Err(e) => {
                        log::debug!("Frame step failed (backward: {}): {}", backward, e);
                        report.failed_steps += 1;
                    }
                }
            }
        }

        log::info!(
            "Frame-step benchmark on {}: forward mean {:.2} ms, backward mean {:.2} ms, {} failed",
            file_path.display(),
            report.forward.mean_ms(),
            report.backward.mean_ms(),
            report.failed_steps
        );
        Ok(report)
    }
}
