//! Media descriptors and the capability probe
//!
//! This module provides the data extracted from a loaded file (`MediaDescriptor`,
//! `ProbeResult`) and the probe that produces it through a `PlayerControl`.

pub mod info;
pub mod probe;

// Re-export commonly used types
pub use info::{MediaDescriptor, ProbeResult};
pub use probe::{CODEC_UNDETECTABLE, probe_file};
