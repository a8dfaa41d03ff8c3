//! Correction engine — the orchestrator and its coarse gate.
//!
//! # Control flow
//!
//! ```text
//! transcript + reference
//!        │
//!        ▼
//! ReferenceCorrector::correct()
//!        │
//!        ├─ no reference ──────────────► pass-through, similarity 0.0
//!        │
//!        ├─ PunctuationPreserver::extract
//!        ├─ gate_similarity ─ below 0.3 ► identity map (no alignment)
//!        ├─ Aligner::align   (gate cleared)
//!        └─ PunctuationPreserver::restore
//!                │
//!                ▼
//!        CorrectionResult { corrected_text, similarity }
//! ```

pub mod corrector;
pub mod gate;

pub use corrector::{CorrectionResult, ReferenceCorrector};
pub use gate::gate_similarity;
