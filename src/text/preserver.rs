//! Punctuation preservation across payload transformations.
//!
//! Alignment operates on the bare hanzi/digit payload, so everything else in
//! the transcript has to be lifted out first and re-inserted afterwards.
//! [`PunctuationPreserver`] records where each symbol sat relative to the
//! payload and puts it back once the payload has been corrected, translating
//! positions through the aligner's index map.
//!
//! Whitespace is deliberately dropped, not preserved: recitation transcripts
//! carry no meaningful spacing and the reference has none either.

use super::is_hanzi;

// ---------------------------------------------------------------------------
// Payload character class
// ---------------------------------------------------------------------------

/// Returns `true` when `c` belongs in the alignment payload: a CJK ideograph
/// (U+4E00–U+9FA5) or an ASCII digit.
pub fn is_payload_char(c: char) -> bool {
    is_hanzi(c) || c.is_ascii_digit()
}

// ---------------------------------------------------------------------------
// PunctuationPreserver
// ---------------------------------------------------------------------------

/// Splits a transcript into payload + symbol placements, then restores the
/// symbols into a transformed payload.  Single-use: one instance per
/// correction call.
#[derive(Debug, Default)]
pub struct PunctuationPreserver {
    /// `(payload index the symbol precedes, symbol)`, in recording order.
    /// An index equal to the payload length means "after the last character".
    placements: Vec<(usize, char)>,
    payload_len: usize,
}

impl PunctuationPreserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the hanzi/digit payload from `text`.
    ///
    /// Every other non-whitespace character is recorded as a placement keyed
    /// to the payload position it immediately precedes.  Whitespace is
    /// discarded entirely.
    pub fn extract(&mut self, text: &str) -> String {
        self.placements.clear();
        self.payload_len = 0;

        let mut payload = String::new();
        for c in text.chars() {
            if is_payload_char(c) {
                payload.push(c);
                self.payload_len += 1;
            } else if !c.is_whitespace() {
                self.placements.push((self.payload_len, c));
            }
        }
        payload
    }

    /// Re-insert the recorded symbols into `corrected`.
    ///
    /// `map` translates original payload indices to corrected-payload indices
    /// (the aligner's map, length `original_len + 1` with an end sentinel).
    /// When `None`, a proportional map is synthesized instead.  Placements
    /// are processed in descending payload-index order so that earlier
    /// insertion points are unaffected by symbols already placed; for
    /// placements outside the map's domain the target falls back to a
    /// proportional estimate.  Targets are always clamped to the current
    /// output length.
    pub fn restore(&self, corrected: &str, map: Option<&[usize]>) -> String {
        if self.placements.is_empty() {
            return corrected.to_owned();
        }

        let mut out: Vec<char> = corrected.chars().collect();
        let corrected_len = out.len();

        let synthesized;
        let map = match map {
            Some(m) => m,
            None => {
                synthesized = proportional_map(self.payload_len, corrected_len);
                &synthesized[..]
            }
        };

        // Reverse recording order = descending index, stable for symbols that
        // share an index.
        for &(index, symbol) in self.placements.iter().rev() {
            let target = if index < map.len() {
                map[index]
            } else if self.payload_len == 0 {
                0
            } else {
                index * corrected_len / self.payload_len
            };
            let target = target.min(out.len());
            out.insert(target, symbol);
        }

        out.into_iter().collect()
    }

    /// Number of payload characters seen by the last [`extract`] call.
    ///
    /// [`extract`]: PunctuationPreserver::extract
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }
}

/// Linear index scaling from an `old_len`-char payload to a `new_len`-char
/// one, inclusive of the end sentinel.  Empty for an empty original payload.
fn proportional_map(old_len: usize, new_len: usize) -> Vec<usize> {
    if old_len == 0 {
        return Vec::new();
    }
    (0..=old_len).map(|i| i * new_len / old_len).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_map(len: usize) -> Vec<usize> {
        (0..=len).collect()
    }

    // --- Extraction ----------------------------------------------------------

    #[test]
    fn extract_keeps_hanzi_and_digits() {
        let mut p = PunctuationPreserver::new();
        assert_eq!(p.extract("你好123，世界"), "你好123世界");
        assert_eq!(p.payload_len(), 7);
    }

    #[test]
    fn extract_records_symbol_positions() {
        let mut p = PunctuationPreserver::new();
        p.extract("你好，世界！");
        assert_eq!(p.placements, vec![(2, '，'), (4, '！')]);
    }

    #[test]
    fn whitespace_is_dropped_not_recorded() {
        let mut p = PunctuationPreserver::new();
        assert_eq!(p.extract("你 好\n世 界"), "你好世界");
        assert!(p.placements.is_empty());
    }

    // --- Round trip ----------------------------------------------------------

    #[test]
    fn identity_round_trip_reproduces_input() {
        let inputs = ["你好，世界！", "《静夜思》：床前明月光。", "！？", ""];
        for input in inputs {
            let mut p = PunctuationPreserver::new();
            let payload = p.extract(input);
            let map = identity_map(p.payload_len());
            assert_eq!(p.restore(&payload, Some(&map)), input);
        }
    }

    #[test]
    fn round_trip_removes_whitespace_only() {
        let mut p = PunctuationPreserver::new();
        let payload = p.extract("床前 明月光，\n疑是地上霜。");
        let map = identity_map(p.payload_len());
        assert_eq!(p.restore(&payload, Some(&map)), "床前明月光，疑是地上霜。");
    }

    #[test]
    fn consecutive_symbols_keep_their_order() {
        let mut p = PunctuationPreserver::new();
        let payload = p.extract("好，！”然");
        let map = identity_map(p.payload_len());
        assert_eq!(p.restore(&payload, Some(&map)), "好，！”然");
    }

    // --- Mapped restoration --------------------------------------------------

    #[test]
    fn restore_follows_alignment_map() {
        let mut p = PunctuationPreserver::new();
        let payload = p.extract("月光，头"); // symbol precedes payload index 2
        assert_eq!(payload, "月光头");
        // Corrected payload grew by one char before index 2.
        let map = vec![0, 1, 3, 4];
        assert_eq!(p.restore("月光明头", Some(&map)), "月光明，头");
    }

    #[test]
    fn out_of_domain_placement_falls_back_to_proportion() {
        let mut p = PunctuationPreserver::new();
        p.extract("床前。");
        // A truncated map without the sentinel entry for index 2.
        let map = vec![0, 1];
        assert_eq!(p.restore("床前", Some(&map)), "床前。");
    }

    #[test]
    fn proportional_map_synthesized_when_absent() {
        let mut p = PunctuationPreserver::new();
        let payload = p.extract("床前明月光。");
        assert_eq!(payload, "床前明月光");
        // Corrected payload same length: proportional map is the identity.
        assert_eq!(p.restore("床前明月光", None), "床前明月光。");
    }

    #[test]
    fn symbols_only_input_restores_onto_empty_payload() {
        let mut p = PunctuationPreserver::new();
        let payload = p.extract("！？");
        assert_eq!(payload, "");
        assert_eq!(p.restore(&payload, None), "！？");
    }

    #[test]
    fn target_is_clamped_to_output_length() {
        let mut p = PunctuationPreserver::new();
        p.extract("床前明月光。");
        // Corrected payload shrank; the trailing placement must clamp.
        let map = vec![0, 1, 2, 3, 4, 5];
        assert_eq!(p.restore("床前明", Some(&map)), "床前明。");
    }
}
