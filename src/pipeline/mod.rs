//! Listing pipeline
//!
//! price filter -> dedup -> classify -> keep matched -> rank

pub mod report;

pub use report::{dedup_first_seen, filter_by_price, matched_entries, rank, Report};

use crate::classify::NameClassifier;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::source::ListingSource;
use crate::types::{Listing, MatchResult};

/// Turns listings into a ranked report
#[derive(Debug)]
pub struct Pipeline {
    classifier: NameClassifier,
    config: ReportConfig,
}

impl Pipeline {
    pub fn new(classifier: NameClassifier, config: ReportConfig) -> Self {
        Self { classifier, config }
    }

    pub fn classifier(&self) -> &NameClassifier {
        &self.classifier
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Pull every listing from `source` and process it
    pub async fn run<S>(&self, source: &mut S) -> Result<Report>
    where
        S: ListingSource + ?Sized,
    {
        tracing::info!(source = %source.describe(), "Loading listings");
        let listings = source.fetch_listings().await?;
        Ok(self.process(listings))
    }

    /// Filter, deduplicate, classify and rank `listings`
    pub fn process(&self, listings: Vec<Listing>) -> Report {
        let total = listings.len();

        let affordable = filter_by_price(listings, self.config.max_price);
        let priced_out = total - affordable.len();

        let unique = dedup_first_seen(affordable);

        let results: Vec<MatchResult> = unique
            .iter()
            .map(|l| self.classifier.classify(&l.name))
            .collect();
        let entries = matched_entries(unique.iter().zip(results.iter()));

        tracing::info!(
            total,
            priced_out,
            unique = unique.len(),
            matched = entries.len(),
            strategy = %self.classifier.kind(),
            "Classified listings"
        );

        Report::new(self.classifier.kind(), total, unique.len(), entries)
    }

    /// Write the JSON and CSV reports into the output directory
    pub fn persist(&self, report: &Report) -> Result<()> {
        let json_path = self.config.json_path();
        let csv_path = self.config.csv_path();

        report.write_json(&json_path)?;
        report.write_csv(&csv_path)?;

        tracing::info!(
            json = %json_path.display(),
            csv = %csv_path.display(),
            entries = report.entries.len(),
            "Reports written"
        );
        Ok(())
    }
}
