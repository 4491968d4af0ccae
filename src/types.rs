//! Core types and structures for domain-sift

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainSiftError;

/// A registrar listing for one domain name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Second-level label, e.g. `d0x3s`
    pub name: String,
    /// Top-level domain without the leading dot
    pub tld: String,
    pub price: f64,
    pub renewal_price: f64,
}

impl Listing {
    pub fn new(
        name: impl Into<String>,
        tld: impl Into<String>,
        price: f64,
        renewal_price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            tld: tld.into(),
            price,
            renewal_price,
        }
    }

    /// `name.tld`
    pub fn full_domain(&self) -> String {
        format!("{}.{}", self.name, self.tld)
    }

    /// Both prices are strictly below `ceiling`
    pub fn within_price(&self, ceiling: f64) -> bool {
        self.price < ceiling && self.renewal_price < ceiling
    }
}

/// Visual pattern found in a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternTag {
    Palindrome,
    DoubleStart,
    DoubleMiddle,
    DoubleEnd,
    Word,
    FunPattern,
    HasNumbers,
    HexLike,
    LeetLike,
}

impl PatternTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternTag::Palindrome => "palindrome",
            PatternTag::DoubleStart => "double_start",
            PatternTag::DoubleMiddle => "double_middle",
            PatternTag::DoubleEnd => "double_end",
            PatternTag::Word => "word",
            PatternTag::FunPattern => "fun_pattern",
            PatternTag::HasNumbers => "has_numbers",
            PatternTag::HexLike => "hex_like",
            PatternTag::LeetLike => "leet_like",
        }
    }
}

impl std::fmt::Display for PatternTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of classifying one name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub matched: bool,
    pub tags: Vec<PatternTag>,
}

impl MatchResult {
    /// Build a result; `matched` is derived from `tags`
    pub fn new(name: impl Into<String>, tags: Vec<PatternTag>) -> Self {
        Self {
            name: name.into(),
            matched: !tags.is_empty(),
            tags,
        }
    }

    /// A result with no tags
    pub fn unmatched(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn has(&self, tag: PatternTag) -> bool {
        self.tags.contains(&tag)
    }

    /// Tags joined with `sep`, e.g. `palindrome, word`
    pub fn joined(&self, sep: &str) -> String {
        self.tags
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

/// A matched listing as written to reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub domain: String,
    pub price: f64,
    pub renewal: f64,
    pub tld: String,
    pub reasons: Vec<PatternTag>,
}

impl ReportEntry {
    pub fn from_parts(listing: &Listing, result: &MatchResult) -> Self {
        Self {
            domain: listing.full_domain(),
            price: listing.price,
            renewal: listing.renewal_price,
            tld: listing.tld.clone(),
            reasons: result.tags.clone(),
        }
    }

    /// Ordering used for ranked output: price, then domain
    pub fn rank_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.price
            .total_cmp(&other.price)
            .then_with(|| self.domain.cmp(&other.domain))
    }
}

/// Selectable classification strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Palindromes, doubled letters, lexicon words, digits
    #[default]
    Lexicon,
    /// Digit-for-letter look-alikes
    Leet,
    /// Lexicon tags followed by the leet tag
    Composite,
}

impl StrategyKind {
    pub fn all() -> [StrategyKind; 3] {
        [StrategyKind::Lexicon, StrategyKind::Leet, StrategyKind::Composite]
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Lexicon => write!(f, "lexicon"),
            StrategyKind::Leet => write!(f, "leet"),
            StrategyKind::Composite => write!(f, "composite"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = DomainSiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lexicon" | "lexicon-based" => Ok(StrategyKind::Lexicon),
            "leet" | "leet-substitution" => Ok(StrategyKind::Leet),
            "composite" => Ok(StrategyKind::Composite),
            other => Err(DomainSiftError::config(format!(
                "Unknown strategy '{}'. Supported strategies: lexicon, leet, composite",
                other
            ))),
        }
    }
}
