//! Phonetics module — syllable decomposition, similarity scoring and
//! heteronym resolution.
//!
//! # Pipeline position
//!
//! ```text
//! char → toned()/readings() → Syllable → similarity() → per-pair score
//!                                      ↘ best_reading() (heteronyms)
//! ```
//!
//! All scoring is driven by the static confusion tables in [`tables`]; they
//! are compile-time constants and safe to share across threads.

pub mod reading;
pub mod similarity;
pub mod syllable;
pub(crate) mod tables;

pub use reading::{best_reading, plain, readings, toned};
pub use similarity::similarity;
pub use syllable::Syllable;
