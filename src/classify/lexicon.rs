//! Word sets consulted by the lexicon strategy
//!
//! A `Lexicon` is built once and shared read-only through `Arc` for the
//! rest of the process. The built-in instance is created lazily on first use.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::words::{DICTIONARY_WORDS, FUN_WORDS};
use crate::error::{DomainSiftError, Result};

/// Length every lexicon entry must have
pub const WORD_LENGTH: usize = 5;

static BUILTIN: Lazy<Arc<Lexicon>> = Lazy::new(|| {
    let lexicon = Lexicon::new(DICTIONARY_WORDS, FUN_WORDS);
    tracing::debug!(
        words = lexicon.word_count(),
        fun_words = lexicon.fun_count(),
        "Built-in lexicon initialised"
    );
    Arc::new(lexicon)
});

/// Immutable dictionary and informal word sets
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
    fun_words: HashSet<String>,
}

/// Result of parsing a word-list file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Accepted entries, lowercased, in first-seen order without repeats
    pub words: Vec<String>,
    /// Entries that were not exactly five ASCII letters
    pub rejected: usize,
    /// Entries seen more than once
    pub duplicates: usize,
}

impl Lexicon {
    /// Build a lexicon from raw entries. Invalid entries are dropped.
    pub fn new<W, F>(words: W, fun_words: F) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        Self {
            words: words.into_iter().filter_map(|w| normalize_entry(w.as_ref())).collect(),
            fun_words: fun_words
                .into_iter()
                .filter_map(|w| normalize_entry(w.as_ref()))
                .collect(),
        }
    }

    /// The compiled-in lexicon, shared by reference
    pub fn builtin() -> Arc<Lexicon> {
        Arc::clone(&BUILTIN)
    }

    /// Load a lexicon, replacing either built-in set with a word-list file.
    ///
    /// A missing or unreadable file, or one without a single valid entry,
    /// is an error.
    pub fn load(words_file: Option<&Path>, fun_file: Option<&Path>) -> Result<Arc<Lexicon>> {
        if words_file.is_none() && fun_file.is_none() {
            return Ok(Self::builtin());
        }

        let builtin = Self::builtin();
        let words = match words_file {
            Some(path) => read_word_list(path)?.words.into_iter().collect(),
            None => builtin.words.clone(),
        };
        let fun_words = match fun_file {
            Some(path) => read_word_list(path)?.words.into_iter().collect(),
            None => builtin.fun_words.clone(),
        };

        let lexicon = Lexicon { words, fun_words };
        tracing::info!(
            words = lexicon.word_count(),
            fun_words = lexicon.fun_count(),
            "Lexicon loaded"
        );
        Ok(Arc::new(lexicon))
    }

    /// `word` must already be lowercase
    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// `word` must already be lowercase
    pub fn is_fun(&self, word: &str) -> bool {
        self.fun_words.contains(word)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn fun_count(&self) -> usize {
        self.fun_words.len()
    }
}

/// Parse word-list text: one entry per line, `#` starts a comment.
pub fn parse_word_list(content: &str) -> WordList {
    let mut list = WordList::default();
    let mut seen = HashSet::new();

    for line in content.lines() {
        let entry = line.split('#').next().unwrap_or("").trim();
        if entry.is_empty() {
            continue;
        }
        match normalize_entry(entry) {
            Some(word) => {
                if seen.insert(word.clone()) {
                    list.words.push(word);
                } else {
                    list.duplicates += 1;
                }
            }
            None => list.rejected += 1,
        }
    }

    list
}

fn read_word_list(path: &Path) -> Result<WordList> {
    let shown = path.to_string_lossy().to_string();
    let content = std::fs::read_to_string(path)
        .map_err(|e| DomainSiftError::lexicon(e.to_string(), Some(shown.clone())))?;

    let list = parse_word_list(&content);
    if list.rejected > 0 || list.duplicates > 0 {
        tracing::warn!(
            path = %shown,
            rejected = list.rejected,
            duplicates = list.duplicates,
            "Skipped invalid word-list entries"
        );
    }
    if list.words.is_empty() {
        return Err(DomainSiftError::lexicon(
            format!("no valid {}-letter words found", WORD_LENGTH),
            Some(shown),
        ));
    }

    Ok(list)
}

fn normalize_entry(raw: &str) -> Option<String> {
    let word = raw.trim().to_ascii_lowercase();
    if word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_lowercase()) {
        Some(word)
    } else {
        None
    }
}
