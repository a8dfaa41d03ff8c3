//! Static phonetic-confusion tables.
//!
//! These tables encode fixed domain knowledge about which Mandarin sounds an
//! ASR model tends to confuse when a speaker recites classical verse.  They
//! are process-wide constants: initialised at compile time, never mutated,
//! safe to share across concurrent corrections without locking.

// ---------------------------------------------------------------------------
// Initials
// ---------------------------------------------------------------------------

/// Valid initial consonant clusters, digraphs first so that prefix matching
/// prefers `zh`/`ch`/`sh` over `z`/`c`/`s`.
pub(crate) const INITIALS: &[&str] = &[
    "zh", "ch", "sh", // retroflex digraphs — must come before z/c/s
    "b", "p", "m", "f", "d", "t", "n", "l", "g", "k", "h", "j", "q", "x", "r",
    "z", "c", "s", "y", "w",
];

/// Groups of initials that are phonetically confusable, by place and manner
/// of articulation.  A pair of distinct initials sharing any group scores a
/// partial match.
pub(crate) const CONFUSABLE_INITIALS: &[&[&str]] = &[
    &["j", "q", "x"],        // alveolo-palatals
    &["z", "c", "s"],        // dentals
    &["zh", "ch", "sh"],     // retroflexes
    &["d", "t", "n", "l"],   // alveolars
    &["g", "k", "h"],        // velars
    &["b", "p", "m"],        // bilabials
    &["f", "h"],             // fricatives
    &["l", "r"],             // lateral vs. retroflex approximant
    &["j", "x"],             // jiu/xiu misrecognitions
    &["ch", "sh"],           // chou/shu misrecognitions
    &["z", "zh"],
    &["c", "ch"],
    &["s", "sh"],
];

// ---------------------------------------------------------------------------
// Finals
// ---------------------------------------------------------------------------

/// Groups of finals (rimes) that are phonetically confusable.
pub(crate) const CONFUSABLE_FINALS: &[&[&str]] = &[
    &["ou", "u"],    // chou/shu
    &["an", "ang"],  // front vs. back nasal
    &["en", "eng"],
    &["in", "ing"],
    &["ao", "ou"],   // similar aperture
    &["ai", "ei"],
    &["ia", "ie"],
    &["ua", "uo"],
];

// ---------------------------------------------------------------------------
// Tones
// ---------------------------------------------------------------------------

/// Tone-confusion matrix over the four full tones, keyed by ordered pair.
///
/// Adjacent contour pairs (1↔2, 3↔4) are easier to mishear and score higher
/// than the remaining combinations.  Pairs absent from the matrix (anything
/// involving the neutral tone `'0'`) contribute nothing.
pub(crate) const TONE_CONFUSION: &[(char, char, f32)] = &[
    ('1', '2', 0.08),
    ('2', '1', 0.08),
    ('3', '4', 0.08),
    ('4', '3', 0.08),
    ('1', '3', 0.03),
    ('1', '4', 0.03),
    ('2', '3', 0.03),
    ('2', '4', 0.03),
    ('3', '1', 0.03),
    ('3', '2', 0.03),
    ('4', '1', 0.03),
    ('4', '2', 0.03),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
