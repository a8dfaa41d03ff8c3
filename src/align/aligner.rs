//! Weighted sequence alignment of a transcript payload against a reference.
//!
//! This is a maximization-form edit alignment: the DP reward for a diagonal
//! step is the phonetic similarity of the two characters (best heteronym
//! reading, recomputed per cell), while horizontal/vertical gap steps earn a
//! fixed score deliberately below any plausible phonetic match.  Backtracking
//! then turns the chosen path into an [`EditOp`] script:
//!
//! * a match above the replace threshold with differing characters becomes a
//!   [`EditOp::Replace`];
//! * a match below threshold is left untouched ([`EditOp::Keep`]) — low
//!   confidence mismatches are never "corrected";
//! * a delete step keeps the extra transcript character verbatim
//!   ([`EditOp::KeepExtra`]);
//! * an insert step only materialises when the installed
//!   [`InsertionPolicy`] approves it, and the default policy never does.

use crate::phonetics::{self, Syllable};

use super::ops::{self, EditOp};

/// Fixed reward for a gap step (insert-from-reference / delete-from-
/// transcript).  Below any phonetic match worth acting on, so spurious gaps
/// lose to genuine matches.
const GAP_SCORE: f32 = 0.3;

// ---------------------------------------------------------------------------
// InsertionPolicy
// ---------------------------------------------------------------------------

/// Everything an insertion decision gets to look at.
pub struct InsertionContext<'a> {
    /// Reference character proposed for insertion.
    pub candidate: char,
    /// Transcript cursor at backtrack time (count of unconsumed characters).
    pub transcript_index: usize,
    /// Reference cursor at backtrack time; `candidate` is
    /// `reference[reference_index - 1]`.
    pub reference_index: usize,
    pub transcript: &'a [char],
    pub reference: &'a [char],
    /// One syllable per transcript character.
    pub transcript_readings: &'a [Syllable],
    /// Primary-reading projection of the reference (best reading against the
    /// same-index transcript syllable; default reading beyond it).
    pub primary_readings: &'a [Syllable],
}

/// Decides whether a reference character missing from the transcript should
/// be inserted into the corrected text.
///
/// The stock policy is [`NeverInsert`]: omitted words are *not* restored,
/// only substitutions and kept extras occur.  This conservatism is
/// deliberate — install a custom policy via [`Aligner::with_policy`] to
/// change it.
pub trait InsertionPolicy: Send + Sync {
    fn should_insert(&self, ctx: &InsertionContext<'_>) -> bool;
}

/// Default policy: rejects every insertion.
pub struct NeverInsert;

impl InsertionPolicy for NeverInsert {
    fn should_insert(&self, _ctx: &InsertionContext<'_>) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Aligner
// ---------------------------------------------------------------------------

/// Which move won a DP cell, recorded for backtracking.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Diagonal move carrying the matched similarity.
    Match(f32),
    /// Horizontal move (take a character from the reference).
    Insert,
    /// Vertical move (transcript has an extra character).
    Delete,
}

/// Result of aligning one payload pair.
#[derive(Debug)]
pub struct Alignment {
    /// Corrected payload (concatenated op outputs).
    pub corrected: String,
    /// Original payload index → corrected payload index, plus end sentinel.
    pub map: Vec<usize>,
    /// The edit script, in original-transcript order.
    pub ops: Vec<EditOp>,
}

/// Phonetic sequence aligner.
pub struct Aligner {
    threshold: f32,
    policy: Box<dyn InsertionPolicy>,
}

impl Default for Aligner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl Aligner {
    /// Per-pair similarity a match must reach before a differing character
    /// is replaced.
    pub const DEFAULT_THRESHOLD: f32 = 0.4;

    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            policy: Box::new(NeverInsert),
        }
    }

    /// Swap in a custom insertion policy.
    pub fn with_policy(mut self, policy: Box<dyn InsertionPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Align `transcript` against `reference` (both bare payloads).
    ///
    /// Either side empty degenerates to the transcript unchanged under an
    /// identity map.
    pub fn align(&self, transcript: &str, reference: &str) -> Alignment {
        let transcript_chars: Vec<char> = transcript.chars().collect();
        let reference_chars: Vec<char> = reference.chars().collect();
        let m = transcript_chars.len();
        let n = reference_chars.len();

        if m == 0 || n == 0 {
            return Alignment {
                corrected: transcript.to_owned(),
                map: ops::identity_map(m),
                ops: transcript_chars
                    .into_iter()
                    .map(|ch| EditOp::Keep { ch })
                    .collect(),
            };
        }

        // Syllable sequences: one observed reading per transcript character,
        // every heteronym candidate per reference character.
        let transcript_readings: Vec<Syllable> =
            transcript_chars.iter().map(|&c| phonetics::toned(c)).collect();
        let reference_candidates: Vec<Vec<Syllable>> =
            reference_chars.iter().map(|&c| phonetics::readings(c)).collect();

        // Primary-reading projection, handed to the insertion policy.  DP
        // scoring below always re-resolves the best reading per cell, since
        // a reference position may face several transcript positions.
        let primary_readings: Vec<Syllable> = reference_candidates
            .iter()
            .enumerate()
            .map(|(j, candidates)| {
                if j < transcript_readings.len() {
                    phonetics::best_reading(&transcript_readings[j], candidates)
                        .1
                        .clone()
                } else {
                    candidates[0].clone()
                }
            })
            .collect();

        // --- DP fill ----------------------------------------------------
        let mut score = vec![vec![0.0_f32; n + 1]; m + 1];
        let mut step: Vec<Vec<Option<Step>>> = vec![vec![None; n + 1]; m + 1];

        for i in 1..=m {
            for j in 1..=n {
                let (sim, _) = phonetics::best_reading(
                    &transcript_readings[i - 1],
                    &reference_candidates[j - 1],
                );

                let matched = score[i - 1][j - 1] + sim;
                let inserted = score[i][j - 1] + GAP_SCORE;
                let deleted = score[i - 1][j] + GAP_SCORE;

                // Tie-break: match over insert over delete.
                if matched >= inserted && matched >= deleted {
                    score[i][j] = matched;
                    step[i][j] = Some(Step::Match(sim));
                } else if inserted >= deleted {
                    score[i][j] = inserted;
                    step[i][j] = Some(Step::Insert);
                } else {
                    score[i][j] = deleted;
                    step[i][j] = Some(Step::Delete);
                }
            }
        }

        // --- Backtrack ---------------------------------------------------
        let mut script: Vec<EditOp> = Vec::with_capacity(m.max(n));
        let (mut i, mut j) = (m, n);

        while i > 0 || j > 0 {
            let recorded = if i > 0 && j > 0 { step[i][j] } else { None };
            match recorded {
                Some(Step::Match(sim)) => {
                    let from = transcript_chars[i - 1];
                    let to = reference_chars[j - 1];
                    if sim >= self.threshold && from != to {
                        script.push(EditOp::Replace { from, to, score: sim });
                    } else {
                        script.push(EditOp::Keep { ch: from });
                    }
                    i -= 1;
                    j -= 1;
                }
                Some(Step::Insert) => {
                    if self.approves_insertion(
                        i,
                        j,
                        &transcript_chars,
                        &reference_chars,
                        &transcript_readings,
                        &primary_readings,
                    ) {
                        script.push(EditOp::Insert {
                            ch: reference_chars[j - 1],
                        });
                    }
                    j -= 1;
                }
                Some(Step::Delete) => {
                    script.push(EditOp::KeepExtra {
                        ch: transcript_chars[i - 1],
                    });
                    i -= 1;
                }
                None if i > 0 => {
                    script.push(EditOp::KeepExtra {
                        ch: transcript_chars[i - 1],
                    });
                    i -= 1;
                }
                None => {
                    if self.approves_insertion(
                        i,
                        j,
                        &transcript_chars,
                        &reference_chars,
                        &transcript_readings,
                        &primary_readings,
                    ) {
                        script.push(EditOp::Insert {
                            ch: reference_chars[j - 1],
                        });
                    }
                    j -= 1;
                }
            }
        }

        script.reverse();

        let (corrected, map) = ops::replay(&script, m);

        let replaced = script
            .iter()
            .filter(|op| matches!(op, EditOp::Replace { .. }))
            .count();
        log::debug!(
            "aligned {m}×{n} payload: {replaced} replacement(s), {} op(s)",
            script.len()
        );

        Alignment {
            corrected,
            map,
            ops: script,
        }
    }

    fn approves_insertion(
        &self,
        i: usize,
        j: usize,
        transcript: &[char],
        reference: &[char],
        transcript_readings: &[Syllable],
        primary_readings: &[Syllable],
    ) -> bool {
        let ctx = InsertionContext {
            candidate: reference[j - 1],
            transcript_index: i,
            reference_index: j,
            transcript,
            reference,
            transcript_readings,
            primary_readings,
        };
        self.policy.should_insert(&ctx)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// Opposite of the stock policy, used to exercise the insert path.
    struct AlwaysInsert;

    impl InsertionPolicy for AlwaysInsert {
        fn should_insert(&self, _ctx: &InsertionContext<'_>) -> bool {
            true
        }
    }

    // --- Degenerate inputs ---------------------------------------------------

    #[test]
    fn empty_reference_passes_transcript_through() {
        let a = Aligner::default().align("床前明月光", "");
        assert_eq!(a.corrected, "床前明月光");
        assert_eq!(a.map, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_transcript_stays_empty() {
        let a = Aligner::default().align("", "床前明月光");
        assert_eq!(a.corrected, "");
        assert_eq!(a.map, vec![0]);
        assert!(a.ops.is_empty());
    }

    // --- Exact match ---------------------------------------------------------

    #[test]
    fn identical_payloads_emit_only_keeps() {
        let a = Aligner::default().align("床前明月光", "床前明月光");
        assert_eq!(a.corrected, "床前明月光");
        assert!(a.ops.iter().all(|op| matches!(op, EditOp::Keep { .. })));
        assert_eq!(a.map, vec![0, 1, 2, 3, 4, 5]);
    }

    // --- Substitution --------------------------------------------------------

    #[test]
    fn confusable_character_is_replaced() {
        // 仇 (chou2) misheard for 书 (shu1): ch/sh + ou/u confusion puts the
        // pair above the replace threshold.
        let a = Aligner::default().align("仇山", "书山");
        assert_eq!(a.corrected, "书山");
        assert!(matches!(
            a.ops[0],
            EditOp::Replace { from: '仇', to: '书', .. }
        ));
        assert!(matches!(a.ops[1], EditOp::Keep { ch: '山' }));
    }

    #[test]
    fn low_similarity_mismatch_is_left_untouched() {
        // 猫 (mao1) vs 光 (guang1) share nothing worth acting on; the
        // transcript keeps its own character even though they differ.
        let a = Aligner::default().align("床前明月猫", "床前明月光");
        assert_eq!(a.corrected, "床前明月猫");
        assert!(!a.ops.iter().any(|op| matches!(op, EditOp::Replace { .. })));
    }

    #[test]
    fn heteronym_reading_enables_replacement() {
        // 航 (hang2) matches 行 through its háng reading, not the default
        // xíng one.
        let a = Aligner::default().align("银航", "银行");
        assert_eq!(a.corrected, "银行");
        assert!(matches!(
            a.ops[1],
            EditOp::Replace { from: '航', to: '行', .. }
        ));
    }

    // --- Extra transcript characters -----------------------------------------

    #[test]
    fn extra_character_is_kept_verbatim() {
        let a = Aligner::default().align("床前明月光啊", "床前明月光");
        assert_eq!(a.corrected, "床前明月光啊");
        assert!(matches!(a.ops[5], EditOp::KeepExtra { ch: '啊' }));
        assert_eq!(a.map, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    // --- Insertion policy ----------------------------------------------------

    #[test]
    fn default_policy_never_inserts() {
        // 明 is missing from the transcript; the stock policy drops the
        // insertion instead of restoring it.
        let a = Aligner::default().align("床前月光", "床前明月光");
        assert_eq!(a.corrected, "床前月光");
        assert!(!a.ops.iter().any(|op| matches!(op, EditOp::Insert { .. })));
        assert_eq!(a.map, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn custom_policy_can_restore_missing_characters() {
        let aligner = Aligner::default().with_policy(Box::new(AlwaysInsert));
        let a = aligner.align("床前月光", "床前明月光");
        assert_eq!(a.corrected, "床前明月光");
        assert!(a.ops.iter().any(
            |op| matches!(op, EditOp::Insert { ch: '明' })
        ));
        // 月 (original index 2) shifted one slot right.
        assert_eq!(a.map, vec![0, 1, 3, 4, 5]);
    }

    // --- Map invariants ------------------------------------------------------

    #[test]
    fn alignment_map_is_monotonic() {
        let cases = [
            ("仇山", "书山"),
            ("床前明月光啊", "床前明月光"),
            ("床前月光", "床前明月光"),
            ("随便说点什么", "床前明月光"),
        ];
        for (t, r) in cases {
            let a = Aligner::default().align(t, r);
            assert!(
                a.map.windows(2).all(|w| w[0] <= w[1]),
                "map not monotonic for {t}: {:?}",
                a.map
            );
            assert_eq!(*a.map.last().unwrap(), a.corrected.chars().count());
        }
    }
}
