//! Sequence alignment module — the correction engine's core DP algorithm.
//!
//! # Architecture
//!
//! ```text
//! transcript payload ─┐
//!                     ├─ Aligner::align() ── DP fill ── backtrack ── EditOps
//! reference payload ──┘                                        │
//!                                            replay ── corrected payload
//!                                                   └─ alignment map
//! ```
//!
//! Scoring is `O(m·n)` similarity evaluations over sentence-length payloads;
//! the fill is iterative, so there is no recursion depth to worry about.

pub mod aligner;
pub mod ops;

pub use aligner::{Aligner, Alignment, InsertionContext, InsertionPolicy, NeverInsert};
pub use ops::{identity_map, EditOp};
