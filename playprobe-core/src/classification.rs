//! Would-require-conversion classification.
//!
//! Decides, from a successful probe and an [`UnsupportedRuleSet`], whether a
//! legacy HTML5-video pipeline would have needed to transcode the file.
//! Everything here is pure.
//!
//! Codec identifiers come in two spellings (`h263` and `h.263`). Both the rule
//! entries and the probed codec go through [`canonicalize_codec`] before any
//! comparison, so the spelling on either side does not matter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::media::ProbeResult;

/// Canonical form of a codec identifier.
///
/// Lowercases, trims, and inserts a `.` before the first run of digits when
/// that run directly follows a letter: `"H263"` and `"h.263"` both become
/// `"h.263"`. Only the first digit run is touched. Idempotent.
pub fn canonicalize_codec(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let Some(digit_at) = lowered.find(|c: char| c.is_ascii_digit()) else {
        return lowered;
    };

    let preceded_by_letter = lowered[..digit_at]
        .chars()
        .next_back()
        .is_some_and(char::is_alphabetic);

    if preceded_by_letter {
        let mut dotted = String::with_capacity(lowered.len() + 1);
        dotted.push_str(&lowered[..digit_at]);
        dotted.push('.');
        dotted.push_str(&lowered[digit_at..]);
        dotted
    } else {
        lowered
    }
}

/// Normalizes an extension to lowercase with one leading dot.
pub fn canonicalize_extension(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches('.').to_lowercase();
    format!(".{trimmed}")
}

/// Codecs and containers a legacy pipeline could not handle. Immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnsupportedRuleSet {
    codecs: BTreeSet<String>,
    container_extensions: BTreeSet<String>,
}

impl UnsupportedRuleSet {
    /// Builds a rule set, canonicalizing every entry. Blank entries are ignored.
    pub fn new<C, E>(codecs: &[C], container_extensions: &[E]) -> Self
    where
        C: AsRef<str>,
        E: AsRef<str>,
    {
        let codecs = codecs
            .iter()
            .map(AsRef::as_ref)
            .filter(|c| !c.trim().is_empty())
            .map(canonicalize_codec)
            .collect();
        let container_extensions = container_extensions
            .iter()
            .map(AsRef::as_ref)
            .filter(|e| !e.trim().trim_start_matches('.').is_empty())
            .map(canonicalize_extension)
            .collect();
        Self {
            codecs,
            container_extensions,
        }
    }

    /// Whether `codec` (any spelling) is unsupported.
    pub fn matches_codec(&self, codec: &str) -> bool {
        self.codecs.contains(&canonicalize_codec(codec))
    }

    /// Whether `extension` (with or without dot, any case) is unsupported.
    pub fn matches_extension(&self, extension: &str) -> bool {
        self.container_extensions.contains(&canonicalize_extension(extension))
    }

    /// Canonical codec entries.
    pub fn codecs(&self) -> impl Iterator<Item = &str> {
        self.codecs.iter().map(String::as_str)
    }

    /// Canonical extension entries.
    pub fn container_extensions(&self) -> impl Iterator<Item = &str> {
        self.container_extensions.iter().map(String::as_str)
    }
}

/// Why a file would have needed conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversionReason {
    UnsupportedCodec,
    UnsupportedContainer,
}

impl std::fmt::Display for ConversionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionReason::UnsupportedCodec => write!(f, "unsupported codec"),
            ConversionReason::UnsupportedContainer => write!(f, "unsupported container"),
        }
    }
}

/// Classification of one probed file. Never mutated once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationVerdict {
    pub probe_result: ProbeResult,
    pub would_require_conversion: bool,
    pub reason: Option<ConversionReason>,
}

impl ClassificationVerdict {
    /// Carries a probe that could not be classified into the report.
    pub fn unclassified(probe_result: ProbeResult) -> Self {
        Self {
            probe_result,
            would_require_conversion: false,
            reason: None,
        }
    }
}

/// Classifies a successful probe against `rules`.
///
/// Codec match is checked first and wins over a container match.
///
/// # Errors
///
/// `CoreError::Classification` if the probe failed or carries no codec.
pub fn classify(probe_result: &ProbeResult, rules: &UnsupportedRuleSet) -> CoreResult<ClassificationVerdict> {
    if !probe_result.succeeded {
        return Err(CoreError::Classification {
            path: probe_result.file_path.clone(),
            reason: format!(
                "probe did not succeed ({})",
                probe_result.error_message.as_deref().unwrap_or("no error recorded")
            ),
        });
    }
    let codec = probe_result.descriptor.codec.as_deref().ok_or_else(|| CoreError::Classification {
        path: probe_result.file_path.clone(),
        reason: "descriptor has no codec".to_string(),
    })?;

    let reason = if rules.matches_codec(codec) {
        Some(ConversionReason::UnsupportedCodec)
    } else if probe_result
        .extension()
        .is_some_and(|ext| rules.matches_extension(&ext))
    {
        Some(ConversionReason::UnsupportedContainer)
    } else {
        None
    };

    Ok(ClassificationVerdict {
        probe_result: probe_result.clone(),
        would_require_conversion: reason.is_some(),
        reason,
    })
}
