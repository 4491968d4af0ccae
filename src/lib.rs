//! Domain Sift - find visually interesting short domain names
//!
//! Classifies candidate names (palindromes, doubled letters, dictionary words,
//! hex and leet look-alikes), then filters, deduplicates and ranks registrar
//! listings into JSON, CSV and console reports.

pub mod classify;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use error::{DomainSiftError, Result};
pub use types::{Listing, MatchResult, PatternTag, ReportEntry, StrategyKind};

// Re-export main functionality
pub use classify::{ClassifyStrategy, Lexicon, NameClassifier};
pub use config::SiftConfig;
pub use pipeline::{Pipeline, Report};
pub use source::{DumpSource, DumpWriter, ListingSource, RegistrarClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
