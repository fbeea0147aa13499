//! Batch orchestration: probe and classify a list of files in sequence.
//!
//! One player session serves the whole batch. A bad file never aborts the
//! run; its failed probe is carried into the output so the aggregate report
//! can count it.

pub mod batch;

pub use batch::{BatchOutcome, run_batch};
