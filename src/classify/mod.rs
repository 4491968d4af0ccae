//! Name classification
//!
//! Scores a candidate name (without TLD) against visual heuristics and
//! returns the matched tags. Every strategy is a pure function of the name
//! and the shared lexicon.

pub mod lexicon;
pub mod strategy;
mod words;

pub use lexicon::{parse_word_list, Lexicon, WordList};
pub use strategy::{CompositeStrategy, LeetStrategy, LexiconStrategy};

use std::sync::Arc;

use crate::types::{MatchResult, StrategyKind};

/// Core trait for all classification strategies
pub trait ClassifyStrategy: Send + Sync {
    /// Which selectable strategy this is
    fn kind(&self) -> StrategyKind;

    /// Classify one name. Never fails; odd input simply does not match.
    fn classify(&self, name: &str) -> MatchResult;
}

/// Get available strategy names
pub fn available_strategies() -> Vec<&'static str> {
    vec!["lexicon", "leet", "composite"]
}

/// Create a strategy by kind
pub fn create_strategy(kind: StrategyKind, lexicon: Arc<Lexicon>) -> Box<dyn ClassifyStrategy> {
    match kind {
        StrategyKind::Lexicon => Box::new(LexiconStrategy::new(lexicon)),
        StrategyKind::Leet => Box::new(LeetStrategy::new()),
        StrategyKind::Composite => Box::new(CompositeStrategy::new(lexicon)),
    }
}

/// Classifier bound to one strategy
pub struct NameClassifier {
    strategy: Box<dyn ClassifyStrategy>,
}

impl NameClassifier {
    /// Classifier using `kind` and the built-in lexicon
    pub fn new(kind: StrategyKind) -> Self {
        Self::with_lexicon(kind, Lexicon::builtin())
    }

    pub fn with_lexicon(kind: StrategyKind, lexicon: Arc<Lexicon>) -> Self {
        Self {
            strategy: create_strategy(kind, lexicon),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    pub fn classify(&self, name: &str) -> MatchResult {
        self.strategy.classify(name)
    }
}

impl Default for NameClassifier {
    fn default() -> Self {
        Self::new(StrategyKind::default())
    }
}

impl std::fmt::Debug for NameClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameClassifier")
            .field("strategy", &self.kind())
            .finish()
    }
}
