//! Phonetic reference-guided correction for Chinese recitation transcripts.
//!
//! Takes a noisy speech-to-text transcript plus the trusted wording of the
//! text being recited (e.g. a classical poem) and replaces phonetically
//! plausible misrecognitions with the reference wording, while preserving
//! the transcript's own punctuation and refusing to "correct" transcripts
//! that are not actually attempts at the reference.
//!
//! # Modules
//!
//! * [`phonetics`] — syllable decomposition, confusion tables, similarity
//!   scoring, heteronym resolution.
//! * [`text`] — payload extraction, punctuation preservation, reference
//!   loading.
//! * [`align`] — the dynamic-programming sequence aligner and its edit ops.
//! * [`engine`] — the correction orchestrator and its coarse gate.
//! * [`config`] — thresholds and TOML persistence.
//!
//! # Quick start
//!
//! ```
//! use recite_correct::{Reference, ReferenceCorrector};
//!
//! let corrector = ReferenceCorrector::new();
//! let reference = Reference::from_text("床前明月光，疑是地上霜。");
//!
//! // The transcript's punctuation is kept even as characters are fixed.
//! let result = corrector.correct("床前明月光。", Some(&reference));
//! assert_eq!(result.text, "床前明月光。");
//!
//! // Without a reference the engine is a no-op.
//! let untouched = corrector.correct("随便说点什么", None);
//! assert_eq!(untouched.text, "随便说点什么");
//! assert_eq!(untouched.similarity, 0.0);
//! ```

pub mod align;
pub mod config;
pub mod engine;
pub mod phonetics;
pub mod text;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use align::{Aligner, Alignment, EditOp, InsertionContext, InsertionPolicy, NeverInsert};
pub use config::CorrectorConfig;
pub use engine::{gate_similarity, CorrectionResult, ReferenceCorrector};
pub use phonetics::{similarity, Syllable};
pub use text::{PunctuationPreserver, Reference, ReferenceError, ReferenceSource};
