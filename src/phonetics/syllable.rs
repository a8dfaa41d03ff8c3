//! Syllable decomposition — splits a romanized syllable into its parts.
//!
//! A [`Syllable`] holds one pinyin token in tone3 style (`"zhong1"`) and the
//! byte boundaries of its initial, rime and tone.  Parsing is total: any
//! string, including ones that are not valid pinyin at all, decomposes into
//! some (possibly empty) triple.

use super::tables::INITIALS;

// ---------------------------------------------------------------------------
// Syllable
// ---------------------------------------------------------------------------

/// A romanized pronunciation unit with an explicit tone digit.
///
/// | Part    | `"zhong1"` | `"an4"` | `"de"` |
/// |---------|------------|---------|--------|
/// | initial | `zh`       | *(empty)* | `d`  |
/// | rime    | `ong`      | `an`    | `e`    |
/// | tone    | `1`        | `4`     | `0`    |
#[derive(Debug, Clone, PartialEq)]
pub struct Syllable {
    text: String,
    initial_end: usize,
    base_end: usize,
    tone: char,
}

impl Syllable {
    /// Decompose a raw syllable string.
    ///
    /// The tone is the trailing ASCII digit when present (else `'0'`), the
    /// initial is the longest matching prefix from the fixed initial list
    /// (empty for zero-initial syllables like `"an4"`), and the rime is
    /// whatever remains between the two.
    pub fn parse(raw: &str) -> Self {
        let (base_end, tone) = match raw.chars().next_back() {
            // A trailing ASCII digit is always one byte.
            Some(c) if c.is_ascii_digit() => (raw.len() - 1, c),
            _ => (raw.len(), '0'),
        };

        let base = &raw[..base_end];
        let initial_end = INITIALS
            .iter()
            .find(|initial| base.starts_with(**initial))
            .map_or(0, |initial| initial.len());

        Self {
            text: raw.to_owned(),
            initial_end,
            base_end,
            tone,
        }
    }

    /// The full syllable text as parsed, tone digit included.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The initial consonant cluster — empty for zero-initial syllables.
    pub fn initial(&self) -> &str {
        &self.text[..self.initial_end]
    }

    /// The final (vowel cluster) left after removing initial and tone digit.
    pub fn rime(&self) -> &str {
        &self.text[self.initial_end..self.base_end]
    }

    /// The tone digit, `'0'` when the syllable carries no tone marker.
    pub fn tone(&self) -> char {
        self.tone
    }
}

impl std::fmt::Display for Syllable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_digraph_initial() {
        let s = Syllable::parse("zhong1");
        assert_eq!(s.initial(), "zh");
        assert_eq!(s.rime(), "ong");
        assert_eq!(s.tone(), '1');
    }

    #[test]
    fn prefers_digraph_over_single_letter() {
        // "sh" must win over "s" for "shu1"
        let s = Syllable::parse("shu1");
        assert_eq!(s.initial(), "sh");
        assert_eq!(s.rime(), "u");
    }

    #[test]
    fn zero_initial_syllable() {
        let s = Syllable::parse("an4");
        assert_eq!(s.initial(), "");
        assert_eq!(s.rime(), "an");
        assert_eq!(s.tone(), '4');
    }

    #[test]
    fn missing_tone_defaults_to_zero() {
        let s = Syllable::parse("de");
        assert_eq!(s.tone(), '0');
        assert_eq!(s.initial(), "d");
        assert_eq!(s.rime(), "e");
    }

    #[test]
    fn empty_string_decomposes_to_empty_parts() {
        let s = Syllable::parse("");
        assert_eq!(s.initial(), "");
        assert_eq!(s.rime(), "");
        assert_eq!(s.tone(), '0');
    }

    #[test]
    fn bare_digit_becomes_tone_only() {
        // Digits survive payload extraction and must decompose without panic.
        let s = Syllable::parse("3");
        assert_eq!(s.initial(), "");
        assert_eq!(s.rime(), "");
        assert_eq!(s.tone(), '3');
    }

    #[test]
    fn non_pinyin_input_is_best_effort() {
        // A hanzi fallback token: no initial match, whole text is the rime.
        let s = Syllable::parse("仇");
        assert_eq!(s.initial(), "");
        assert_eq!(s.rime(), "仇");
        assert_eq!(s.tone(), '0');
    }
}
