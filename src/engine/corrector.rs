//! Correction orchestrator — ties the gate, the preserver and the aligner
//! together into the engine's public entry point.
//!
//! The orchestration is a pure, synchronous computation: no I/O, nothing
//! shared across calls, so one [`ReferenceCorrector`] can serve concurrent
//! requests behind an `Arc` without locking.

use serde::Serialize;

use crate::align::{self, Aligner};
use crate::config::CorrectorConfig;
use crate::text::{PunctuationPreserver, Reference, ReferenceSource};

use super::gate::gate_similarity;

// ---------------------------------------------------------------------------
// CorrectionResult
// ---------------------------------------------------------------------------

/// Outcome of one correction call.
///
/// `similarity` is the coarse gate score, not a post-alignment measure; it
/// is what serving layers report as the confidence figure and test against
/// the gate threshold to announce "correction enabled".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectionResult {
    /// Corrected transcript with the original punctuation restored.
    #[serde(rename = "corrected_text")]
    pub text: String,
    /// Whole-string phonetic similarity in `[0, 1]`; `0.0` when no usable
    /// reference was supplied.
    pub similarity: f32,
}

// ---------------------------------------------------------------------------
// ReferenceCorrector
// ---------------------------------------------------------------------------

/// Phonetic reference-guided transcript corrector.
///
/// # Example
///
/// ```
/// use recite_correct::{Reference, ReferenceCorrector};
///
/// let corrector = ReferenceCorrector::new();
/// let reference = Reference::from_text("床前明月光");
///
/// let result = corrector.correct("床前明月光。", Some(&reference));
/// assert_eq!(result.text, "床前明月光。");
/// assert!(result.similarity >= 0.3);
/// ```
#[derive(Debug, Default)]
pub struct ReferenceCorrector {
    config: CorrectorConfig,
}

impl ReferenceCorrector {
    /// Corrector with the stock thresholds (gate 0.3, replace 0.4).
    pub fn new() -> Self {
        Self::default()
    }

    /// Corrector with explicit thresholds.
    pub fn from_config(config: CorrectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Whether this result's similarity clears the gate — the same check the
    /// orchestrator uses internally, exposed so serving layers stay
    /// consistent with it.
    pub fn correction_enabled(&self, result: &CorrectionResult) -> bool {
        result.similarity > self.config.gate_threshold
    }

    /// Correct `transcript` against `reference`.
    ///
    /// With no reference (or one that contained no ideographs) the
    /// transcript passes through untouched with similarity `0.0`.  Otherwise
    /// the payload is extracted, gated, aligned when the gate clears, and
    /// the punctuation restored around the corrected payload.
    pub fn correct(&self, transcript: &str, reference: Option<&Reference>) -> CorrectionResult {
        let reference = match reference {
            Some(r) if !r.is_empty() => r,
            _ => {
                log::debug!("no usable reference; passing transcript through");
                return CorrectionResult {
                    text: transcript.to_owned(),
                    similarity: 0.0,
                };
            }
        };

        let mut preserver = PunctuationPreserver::new();
        let payload = preserver.extract(transcript);

        let similarity = gate_similarity(&payload, reference.payload());

        let (corrected, map) = if similarity >= self.config.gate_threshold {
            let alignment =
                Aligner::new(self.config.replace_threshold).align(&payload, reference.payload());
            (alignment.corrected, alignment.map)
        } else {
            log::info!(
                "gate similarity {similarity:.3} below {:.2}; transcript left as-is",
                self.config.gate_threshold
            );
            let len = payload.chars().count();
            (payload, align::identity_map(len))
        };

        let text = preserver.restore(&corrected, Some(&map));
        CorrectionResult { text, similarity }
    }

    /// Convenience wrapper that resolves a [`ReferenceSource`] first.
    pub fn correct_source(&self, transcript: &str, source: &ReferenceSource) -> CorrectionResult {
        let reference = source.load();
        self.correct(transcript, reference.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
