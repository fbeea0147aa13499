//! Aggregate reporting over classified probes.
//!
//! This module folds per-file verdicts into a single summary for display.

pub mod summary;

pub use summary::{AggregateReport, FailedProbe, summarize};
