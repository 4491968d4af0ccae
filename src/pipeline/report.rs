//! Deduplication, ranking and report output

use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainSiftError, Result};
use crate::types::{Listing, MatchResult, ReportEntry, StrategyKind};

/// Keep listings whose first-year and renewal prices are both below `ceiling`
pub fn filter_by_price(listings: Vec<Listing>, ceiling: Option<f64>) -> Vec<Listing> {
    match ceiling {
        Some(ceiling) => listings
            .into_iter()
            .filter(|l| l.within_price(ceiling))
            .collect(),
        None => listings,
    }
}

/// Drop repeated `name.tld` keys, keeping the first occurrence in input order
pub fn dedup_first_seen(listings: Vec<Listing>) -> Vec<Listing> {
    let mut seen = HashSet::with_capacity(listings.len());
    listings
        .into_iter()
        .filter(|l| seen.insert(l.full_domain()))
        .collect()
}

/// Build entries for matched results only
pub fn matched_entries<'a, I>(classified: I) -> Vec<ReportEntry>
where
    I: IntoIterator<Item = (&'a Listing, &'a MatchResult)>,
{
    classified
        .into_iter()
        .filter(|(_, result)| result.matched)
        .map(|(listing, result)| ReportEntry::from_parts(listing, result))
        .collect()
}

/// Sort ascending by price, then domain
pub fn rank(entries: &mut [ReportEntry]) {
    entries.sort_by(|a, b| a.rank_cmp(b));
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub strategy: StrategyKind,
    /// Listings received from the source, before any filtering
    pub total_listings: usize,
    /// Listings left after the price filter and deduplication
    pub unique_listings: usize,
    /// Ranked matched entries
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(
        strategy: StrategyKind,
        total_listings: usize,
        unique_listings: usize,
        mut entries: Vec<ReportEntry>,
    ) -> Self {
        rank(&mut entries);
        Self {
            generated_at: Utc::now(),
            strategy,
            total_listings,
            unique_listings,
            entries,
        }
    }

    pub fn matched(&self) -> usize {
        self.entries.len()
    }

    /// First `n` ranked entries
    pub fn top(&self, n: usize) -> &[ReportEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Write the ranked entries as a pretty JSON array
    pub fn write_json(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| crate::internal_error!("Failed to serialize report: {}", e))?;

        std::fs::write(path, content).map_err(|e| {
            DomainSiftError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }

    /// Write the ranked entries as CSV, reasons joined with `;`
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        ensure_parent(path)?;
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["domain", "price", "renewal", "tld", "reasons"])?;

        for entry in &self.entries {
            let reasons = entry
                .reasons
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(";");
            let price = format!("{:.2}", entry.price);
            let renewal = format!("{:.2}", entry.renewal);
            writer.write_record([
                entry.domain.as_str(),
                price.as_str(),
                renewal.as_str(),
                entry.tld.as_str(),
                reasons.as_str(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Plain-text ranking table of the top `n` entries
    pub fn render_table(&self, n: usize) -> String {
        let top = self.top(n);
        let width = top
            .iter()
            .map(|e| e.domain.len())
            .max()
            .unwrap_or(0)
            .max("Domain".len());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:>3}  {:<width$}  {:>8}  {:>8}  Traits",
            "#",
            "Domain",
            "Price",
            "Renewal",
            width = width
        );
        let _ = writeln!(out, "{}", "─".repeat(width + 36));

        for (i, entry) in top.iter().enumerate() {
            let traits = entry
                .reasons
                .iter()
                .map(|r| r.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                out,
                "{:>3}  {:<width$}  {:>8}  {:>8}  {}",
                i + 1,
                entry.domain,
                format!("${:.2}", entry.price),
                format!("${:.2}", entry.renewal),
                traits,
                width = width
            );
        }

        out
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            DomainSiftError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
        })?;
    }
    Ok(())
}
