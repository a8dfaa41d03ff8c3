//! Edit operations and their replay into a corrected payload.
//!
//! The aligner's backtracking step emits a flat list of [`EditOp`]s in
//! original-transcript order; [`replay`] turns that list into the corrected
//! payload plus the index map the punctuation preserver needs.

// ---------------------------------------------------------------------------
// EditOp
// ---------------------------------------------------------------------------

/// One step of the edit script produced by alignment.
///
/// The operation set is closed; replay matches exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOp {
    /// Transcript character confirmed (or left untouched below threshold).
    Keep { ch: char },
    /// Phonetically-plausible misrecognition replaced by the reference
    /// character; `score` is the matched similarity.
    Replace { from: char, to: char, score: f32 },
    /// Reference character inserted (only when an insertion policy approves).
    Insert { ch: char },
    /// Extra transcript character with no reference counterpart, kept
    /// verbatim (words the speaker added).
    KeepExtra { ch: char },
}

impl EditOp {
    /// The character this operation contributes to the corrected payload.
    pub fn output_char(&self) -> char {
        match *self {
            EditOp::Keep { ch } | EditOp::Insert { ch } | EditOp::KeepExtra { ch } => ch,
            EditOp::Replace { to, .. } => to,
        }
    }

    /// Whether this operation consumes one original transcript position.
    fn consumes_input(&self) -> bool {
        !matches!(self, EditOp::Insert { .. })
    }
}

// ---------------------------------------------------------------------------
// Replay
// ---------------------------------------------------------------------------

/// Identity index map over a payload of `len` characters (plus sentinel).
pub fn identity_map(len: usize) -> Vec<usize> {
    (0..=len).collect()
}

/// Replay `ops` in forward order, building the corrected payload and the
/// alignment map.
///
/// Every consuming op records `map[old] = new` before advancing both
/// cursors; `Insert` advances only the output cursor.  The trailing sentinel
/// `map[transcript_len]` is set to the corrected length afterwards, so the
/// map is monotonic non-decreasing end to end.
pub(crate) fn replay(ops: &[EditOp], transcript_len: usize) -> (String, Vec<usize>) {
    let mut corrected = String::new();
    let mut map = vec![0usize; transcript_len + 1];
    let mut old_idx = 0usize;
    let mut new_idx = 0usize;

    for op in ops {
        if op.consumes_input() {
            map[old_idx] = new_idx;
            old_idx += 1;
        }
        corrected.push(op.output_char());
        new_idx += 1;
    }

    map[transcript_len] = new_idx;
    (corrected, map)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
