//! Phonetic similarity scoring between two syllables.
//!
//! The score is a weighted sum over the three syllable parts:
//!
//! | Part    | Exact match | Confusable        | Mismatch |
//! |---------|-------------|-------------------|----------|
//! | initial | 0.5         | 0.2 (shared group), 0.15 (one side dropped) | 0.0 |
//! | rime    | 0.5         | 0.3 (shared group) | 0.0     |
//! | tone    | 0.1         | 0.08 / 0.03 (matrix) | 0.0   |
//!
//! Identical raw strings short-circuit to 1.0; the sum is clamped to 1.0.

use super::syllable::Syllable;
use super::tables::{CONFUSABLE_FINALS, CONFUSABLE_INITIALS, TONE_CONFUSION};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score how plausibly an ASR model could confuse two syllables.
///
/// Always in `[0.0, 1.0]`; `1.0` exactly when the raw strings are equal.
pub fn similarity(a: &Syllable, b: &Syllable) -> f32 {
    if a.as_str() == b.as_str() {
        return 1.0;
    }

    let mut score = 0.0;

    score += if a.initial() == b.initial() {
        0.5
    } else {
        initial_affinity(a.initial(), b.initial())
    };

    score += if a.rime() == b.rime() {
        0.5
    } else {
        rime_affinity(a.rime(), b.rime())
    };

    score += tone_affinity(a.tone(), b.tone());

    score.min(1.0)
}

// ---------------------------------------------------------------------------
// Per-part affinities
// ---------------------------------------------------------------------------

/// Partial credit for two distinct initials.
fn initial_affinity(a: &str, b: &str) -> f32 {
    // Initial-dropping errors (e.g. hao → ao) score below a group match.
    if a.is_empty() != b.is_empty() {
        return 0.15;
    }

    let shared_group = CONFUSABLE_INITIALS
        .iter()
        .any(|group| contains(group, a) && contains(group, b));
    if shared_group {
        0.2
    } else {
        0.0
    }
}

/// Partial credit for two distinct rimes.
fn rime_affinity(a: &str, b: &str) -> f32 {
    let shared_group = CONFUSABLE_FINALS
        .iter()
        .any(|group| contains(group, a) && contains(group, b));
    if shared_group {
        0.3
    } else {
        0.0
    }
}

/// Tone term: exact match, matrix lookup, or nothing.
fn tone_affinity(a: char, b: char) -> f32 {
    if a == b {
        return 0.1;
    }
    TONE_CONFUSION
        .iter()
        .find(|&&(x, y, _)| x == a && y == b)
        .map_or(0.0, |&(_, _, score)| score)
}

fn contains(group: &[&str], part: &str) -> bool {
    group.iter().any(|member| *member == part)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sim(a: &str, b: &str) -> f32 {
        similarity(&Syllable::parse(a), &Syllable::parse(b))
    }

    // --- Identity and bounds -------------------------------------------------

    #[test]
    fn identical_syllables_score_one() {
        for p in ["zhong1", "an4", "de", "shu1", ""] {
            assert_eq!(sim(p, p), 1.0);
        }
    }

    #[test]
    fn scores_stay_within_unit_interval() {
        let pairs = [
            ("zhong1", "chong1"),
            ("chou2", "shu1"),
            ("hao2", "ao1"),
            ("ming2", "min2"),
            ("a1", "yu4"),
            ("", "zhong1"),
        ];
        for (a, b) in pairs {
            let s = sim(a, b);
            assert!((0.0..=1.0).contains(&s), "sim({a},{b}) = {s}");
        }
    }

    // --- Component scoring ---------------------------------------------------

    #[test]
    fn confusable_initials_score_partial() {
        // zh/ch share a retroflex group: 0.2 + rime 0.5 + tone 0.1
        let s = sim("zhong1", "chong1");
        assert!((s - 0.8).abs() < 1e-6, "got {s}");
    }

    #[test]
    fn dropped_initial_scores_low_partial() {
        // hao → ao: 0.15 initial + 0.5 rime + tone matrix (2,1) = 0.08
        let s = sim("hao2", "ao1");
        assert!((s - 0.73).abs() < 1e-6, "got {s}");
    }

    #[test]
    fn chou_shu_confusion_exceeds_replace_threshold() {
        // ch/sh initials (0.2) + ou/u rimes (0.3) + tones 2→1 (0.08)
        let s = sim("chou2", "shu1");
        assert!((s - 0.58).abs() < 1e-6, "got {s}");
        assert!(s > 0.4);
    }

    #[test]
    fn nasal_finals_are_confusable() {
        // min/ming: initial 0.5 + in/ing group 0.3 + tone 0.1
        let s = sim("min2", "ming2");
        assert!((s - 0.9).abs() < 1e-6, "got {s}");
    }

    #[test]
    fn unrelated_syllables_score_near_zero() {
        // qian2 vs ming2: only the tone matches.
        let s = sim("qian2", "ming2");
        assert!((s - 0.1).abs() < 1e-6, "got {s}");
    }

    // --- Tone matrix ---------------------------------------------------------

    #[test]
    fn adjacent_tone_pairs_score_higher() {
        // Same initial+rime, tones 1 vs 2: 0.5 + 0.5 + 0.08 clamps to 1.0.
        assert_eq!(sim("ma1", "ma2"), 1.0);
        // Distant pair 1 vs 3 also clamps; check the raw tone term instead.
        assert!((tone_affinity('1', '2') - 0.08).abs() < 1e-6);
        assert!((tone_affinity('1', '3') - 0.03).abs() < 1e-6);
        assert_eq!(tone_affinity('0', '1'), 0.0);
        assert!((tone_affinity('4', '4') - 0.1).abs() < 1e-6);
    }
}
