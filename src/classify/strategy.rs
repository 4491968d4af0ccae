//! Classification strategies

use std::sync::Arc;

use super::lexicon::{Lexicon, WORD_LENGTH};
use super::ClassifyStrategy;
use crate::types::{MatchResult, PatternTag, StrategyKind};

/// Digits that read as letters: 0→o, 1→l, 5→s, 3→e, 4→a
const LEET_DIGITS: &[u8] = b"01534";

/// Palindromes, doubled letters, lexicon membership and digit patterns
#[derive(Debug, Clone)]
pub struct LexiconStrategy {
    lexicon: Arc<Lexicon>,
}

impl LexiconStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Tags in evaluation order for an already normalized name
    pub(crate) fn tags_for(&self, name: &str) -> Vec<PatternTag> {
        let bytes = name.as_bytes();
        let mut tags = Vec::new();

        if !bytes.is_empty() && bytes.iter().eq(bytes.iter().rev()) {
            tags.push(PatternTag::Palindrome);
        }

        if bytes.len() == WORD_LENGTH {
            if bytes[0] == bytes[1] {
                tags.push(PatternTag::DoubleStart);
            }
            if bytes[1] == bytes[2] || bytes[2] == bytes[3] {
                tags.push(PatternTag::DoubleMiddle);
            }
            if bytes[3] == bytes[4] {
                tags.push(PatternTag::DoubleEnd);
            }
            if self.lexicon.is_word(name) {
                tags.push(PatternTag::Word);
            }
            if self.lexicon.is_fun(name) {
                tags.push(PatternTag::FunPattern);
            }
        }

        if bytes.iter().any(u8::is_ascii_digit) {
            tags.push(PatternTag::HasNumbers);
            if bytes.contains(&b'0') && bytes.contains(&b'x') {
                tags.push(PatternTag::HexLike);
            }
        }

        tags
    }
}

impl ClassifyStrategy for LexiconStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Lexicon
    }

    fn classify(&self, name: &str) -> MatchResult {
        match normalize(name) {
            Some(lowered) => MatchResult::new(name, self.tags_for(&lowered)),
            None => MatchResult::unmatched(name),
        }
    }
}

/// Digit-for-letter look-alikes such as `l33t5` or `n00bs`
#[derive(Debug, Clone, Copy, Default)]
pub struct LeetStrategy;

impl LeetStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Whether a normalized name reads as leet-speak
    pub(crate) fn is_leet(&self, name: &str) -> bool {
        let bytes = name.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return false;
        }

        let digits = bytes.iter().filter(|b| b.is_ascii_digit()).count();
        let letters = bytes.iter().filter(|b| b.is_ascii_alphabetic()).count();

        (1..=3).contains(&digits)
            && letters >= 2
            && bytes.iter().any(|b| LEET_DIGITS.contains(b))
    }
}

impl ClassifyStrategy for LeetStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Leet
    }

    fn classify(&self, name: &str) -> MatchResult {
        let tags = match normalize(name) {
            Some(lowered) if self.is_leet(&lowered) => vec![PatternTag::LeetLike],
            _ => Vec::new(),
        };
        MatchResult::new(name, tags)
    }
}

/// Lexicon tags followed by the leet tag
#[derive(Debug, Clone)]
pub struct CompositeStrategy {
    lexicon: LexiconStrategy,
    leet: LeetStrategy,
}

impl CompositeStrategy {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon: LexiconStrategy::new(lexicon),
            leet: LeetStrategy::new(),
        }
    }
}

impl ClassifyStrategy for CompositeStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Composite
    }

    fn classify(&self, name: &str) -> MatchResult {
        let Some(lowered) = normalize(name) else {
            return MatchResult::unmatched(name);
        };

        let mut tags = self.lexicon.tags_for(&lowered);
        if self.leet.is_leet(&lowered) {
            tags.push(PatternTag::LeetLike);
        }
        MatchResult::new(name, tags)
    }
}

/// Lowercase a name made only of ASCII letters and digits.
///
/// Empty names and names with any other character yield `None`.
pub(crate) fn normalize(name: &str) -> Option<String> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(name.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> LexiconStrategy {
        LexiconStrategy::new(Lexicon::builtin())
    }

    #[test]
    fn test_palindrome_case_insensitive() {
        let lower = lexicon().classify("radar");
        let upper = lexicon().classify("RADAR");
        assert!(lower.has(PatternTag::Palindrome));
        assert_eq!(lower.tags, upper.tags);
    }

    #[test]
    fn test_palindrome_any_length() {
        assert!(lexicon().classify("abba").has(PatternTag::Palindrome));
        assert!(lexicon().classify("racecar").has(PatternTag::Palindrome));
        assert_eq!(lexicon().classify("a").tags, vec![PatternTag::Palindrome]);
        assert_eq!(lexicon().classify("Z").tags, vec![PatternTag::Palindrome]);
        assert!(!lexicon().classify("ab").matched);
    }

    #[test]
    fn test_doubles() {
        let result = lexicon().classify("aabbc");
        assert!(result.has(PatternTag::DoubleStart));
        assert!(result.has(PatternTag::DoubleMiddle));
        assert!(!result.has(PatternTag::DoubleEnd));

        let result = lexicon().classify("qwezz");
        assert_eq!(result.tags, vec![PatternTag::DoubleEnd]);

        let result = lexicon().classify("qwwer");
        assert_eq!(result.tags, vec![PatternTag::DoubleMiddle]);
    }

    #[test]
    fn test_doubles_gated_on_five_chars() {
        assert!(!lexicon().classify("aabcdef").matched);
        assert!(!lexicon().classify("aab").has(PatternTag::DoubleStart));
    }

    #[test]
    fn test_word_and_fun() {
        let result = lexicon().classify("house");
        assert!(result.matched);
        assert!(result.has(PatternTag::Word));

        let result = lexicon().classify("Jazzy");
        assert!(result.has(PatternTag::FunPattern));
        assert!(result.has(PatternTag::DoubleMiddle));
    }

    #[test]
    fn test_numbers_and_hex() {
        let result = lexicon().classify("0xcat");
        assert_eq!(result.tags, vec![PatternTag::HasNumbers, PatternTag::HexLike]);

        let result = lexicon().classify("d0x3s");
        assert!(result.has(PatternTag::HasNumbers));
        assert!(result.has(PatternTag::HexLike));

        let result = lexicon().classify("b0b3d");
        assert!(result.has(PatternTag::HasNumbers));
        assert!(!result.has(PatternTag::HexLike));

        // Number checks are not gated on length
        let result = lexicon().classify("0x1");
        assert_eq!(result.tags, vec![PatternTag::HasNumbers, PatternTag::HexLike]);
    }

    #[test]
    fn test_tag_order() {
        // "x00x" is a 4-char palindrome with digits
        let result = lexicon().classify("x00x");
        assert_eq!(
            result.tags,
            vec![PatternTag::Palindrome, PatternTag::HasNumbers, PatternTag::HexLike]
        );
    }

    #[test]
    fn test_total_over_odd_input() {
        for name in ["", "ab-cd", "héllo", "ab cd", "ßßßßß", "日本語"] {
            let result = lexicon().classify(name);
            assert!(!result.matched, "{} should not match", name);
            assert!(result.tags.is_empty());
            assert_eq!(result.name, name);
        }
    }

    #[test]
    fn test_plain_name_unmatched() {
        let result = lexicon().classify("qwrtz");
        assert!(!result.matched);
    }

    #[test]
    fn test_leet() {
        let leet = LeetStrategy::new();
        assert_eq!(leet.classify("l33t5").tags, vec![PatternTag::LeetLike]);
        assert!(leet.classify("N00BS").matched);
        assert!(leet.classify("h4ck9").matched);
        // No digits
        assert!(!leet.classify("abcde").matched);
        // Digits without look-alikes
        assert!(!leet.classify("ab789").matched);
        // Too many digits
        assert!(!leet.classify("a1234").matched);
        // Only five-character names
        assert!(!leet.classify("l33t").matched);
    }

    #[test]
    fn test_composite_appends_leet() {
        let composite = CompositeStrategy::new(Lexicon::builtin());
        let result = composite.classify("d0x3s");
        assert_eq!(
            result.tags,
            vec![PatternTag::HasNumbers, PatternTag::HexLike, PatternTag::LeetLike]
        );

        let result = composite.classify("house");
        assert_eq!(result.tags, vec![PatternTag::Word]);
    }

    #[test]
    fn test_strategies_disagree() {
        // has_numbers under lexicon, nothing under leet
        let name = "ab789";
        assert!(lexicon().classify(name).matched);
        assert!(!LeetStrategy::new().classify(name).matched);
    }
}
