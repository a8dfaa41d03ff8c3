//! Coarse correction gate.
//!
//! Before running the `O(m·n)` structural alignment, the orchestrator needs
//! a cheap answer to "is this transcript even an attempt at the reference?".
//! The gate joins each side's toneless pinyin into one string and measures a
//! character-level Levenshtein ratio — a linear check, independent of the
//! aligner's per-pair scoring matrix.

use crate::phonetics;

// ---------------------------------------------------------------------------
// Gate similarity
// ---------------------------------------------------------------------------

/// Whole-string phonetic similarity in `[0, 1]`.
///
/// `1 - distance / max_len` over the whitespace-joined plain-pinyin
/// renderings of both payloads; `0.0` when both are empty.
pub fn gate_similarity(transcript_payload: &str, reference_payload: &str) -> f32 {
    let transcript_pinyin = joined_pinyin(transcript_payload);
    let reference_pinyin = joined_pinyin(reference_payload);

    let max_len = transcript_pinyin
        .chars()
        .count()
        .max(reference_pinyin.chars().count());
    if max_len == 0 {
        return 0.0;
    }

    let distance = strsim::levenshtein(&transcript_pinyin, &reference_pinyin);
    1.0 - distance as f32 / max_len as f32
}

/// One toneless pinyin token per payload character, space-joined.
fn joined_pinyin(payload: &str) -> String {
    payload
        .chars()
        .map(phonetics::plain)
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
