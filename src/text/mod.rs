//! Text handling — payload extraction, punctuation preservation and
//! reference loading.
//!
//! The aligner only ever sees bare hanzi/digit payloads; this module owns
//! every conversion between those payloads and real-world strings:
//!
//! ```text
//! transcript ──extract()──► payload ──(align)──► corrected payload
//!      symbols recorded ────────restore()────────► corrected transcript
//!
//! reference text / file ──Reference::from_*──► hanzi-only payload
//! ```

pub mod preserver;
pub mod reference;

pub use preserver::{is_payload_char, PunctuationPreserver};
pub use reference::{Reference, ReferenceError, ReferenceSource};

/// Returns `true` for CJK ideographs in U+4E00–U+9FA5, the range recitation
/// references are drawn from.
pub fn is_hanzi(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}
