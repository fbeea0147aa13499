//! Summary reporting module
//!
//! This module folds a sequence of verdicts into an `AggregateReport`:
//! counts, mean load time and a per-codec breakdown. The fold is pure and
//! does not depend on input order.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::classification::{ClassificationVerdict, canonicalize_codec};

/// A file whose probe failed, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FailedProbe {
    pub file_path: PathBuf,
    pub error_message: String,
}

/// Totals for a batch of probed files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    /// Number of files folded in
    pub total: usize,

    /// Files whose probe succeeded
    pub succeeded_count: usize,

    /// Files whose probe failed
    pub failed_count: usize,

    /// Succeeded files the legacy pipeline would have had to convert
    pub conversions_avoided: usize,

    /// Mean load time over succeeded files (0 when none succeeded)
    pub average_load_time_millis: f64,

    /// Succeeded files per canonical codec
    pub per_codec_counts: BTreeMap<String, usize>,

    /// Failed files, sorted by path
    pub failures: Vec<FailedProbe>,
}

impl AggregateReport {
    /// Share of succeeded files that would have needed conversion, in percent.
    pub fn conversion_rate_percent(&self) -> f64 {
        if self.succeeded_count == 0 {
            0.0
        } else {
            self.conversions_avoided as f64 * 100.0 / self.succeeded_count as f64
        }
    }
}

/// Folds `verdicts` into an `AggregateReport`.
///
/// Failed probes count towards `total` and `failed_count` and are listed in
/// `failures`; they are excluded from the load-time mean and the codec counts.
pub fn summarize<'a, I>(verdicts: I) -> AggregateReport
where
    I: IntoIterator<Item = &'a ClassificationVerdict>,
{
    let mut report = AggregateReport::default();
    let mut load_time_total: u128 = 0;

    for verdict in verdicts {
        let probe = &verdict.probe_result;
        report.total += 1;

        if !probe.succeeded {
            report.failed_count += 1;
            report.failures.push(FailedProbe {
                file_path: probe.file_path.clone(),
                error_message: probe
                    .error_message
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
            continue;
        }

        report.succeeded_count += 1;
        load_time_total += u128::from(probe.load_time_millis);
        if verdict.would_require_conversion {
            report.conversions_avoided += 1;
        }
        if let Some(codec) = probe.descriptor.codec.as_deref() {
            *report
                .per_codec_counts
                .entry(canonicalize_codec(codec))
                .or_insert(0) += 1;
        }
    }

    if report.succeeded_count > 0 {
        report.average_load_time_millis = load_time_total as f64 / report.succeeded_count as f64;
    }
    report.failures.sort();

    report
}
