//! Character-to-pinyin lookup and heteronym resolution.
//!
//! Wraps the `pinyin` crate so the rest of the engine never touches raw
//! romanization: [`toned`] yields one tone3-style reading per character,
//! [`readings`] yields every heteronym candidate, and [`best_reading`] picks
//! the candidate closest to an observed transcript syllable.
//!
//! Characters without a pinyin entry (digits, stray latin letters) fall back
//! to the character itself so every payload position always has a syllable.

use pinyin::{ToPinyin, ToPinyinMulti};

use super::similarity::similarity;
use super::syllable::Syllable;

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

/// Default reading of `c` in tone3 style (`中` → `"zhong1"`).
pub fn toned(c: char) -> Syllable {
    match c.to_pinyin() {
        Some(p) => Syllable::parse(p.with_tone_num_end()),
        None => Syllable::parse(&c.to_string()),
    }
}

/// All heteronym readings of `c`, most common first.  Never empty.
pub fn readings(c: char) -> Vec<Syllable> {
    match c.to_pinyin_multi() {
        Some(multi) => multi
            .into_iter()
            .map(|p| Syllable::parse(p.with_tone_num_end()))
            .collect(),
        None => vec![Syllable::parse(&c.to_string())],
    }
}

/// Toneless reading of `c` (`中` → `"zhong"`), used by the coarse gate.
pub fn plain(c: char) -> String {
    match c.to_pinyin() {
        Some(p) => p.plain().to_owned(),
        None => c.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Heteronym resolution
// ---------------------------------------------------------------------------

/// Pick the candidate reading most similar to `observed`.
///
/// `candidates` must be non-empty.  Ties keep the first-seen candidate, so
/// when every candidate scores zero the default (most common) reading wins.
pub fn best_reading<'a>(
    observed: &Syllable,
    candidates: &'a [Syllable],
) -> (f32, &'a Syllable) {
    debug_assert!(!candidates.is_empty(), "candidate readings must be non-empty");

    let mut best_score = 0.0_f32;
    let mut best = &candidates[0];
    for candidate in candidates {
        let score = similarity(observed, candidate);
        if score > best_score {
            best_score = score;
            best = candidate;
        }
    }
    (best_score, best)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
