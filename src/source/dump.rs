//! JSON-lines dump of raw search responses
//!
//! Each line holds one response page exactly as the search endpoint
//! returned it. Fetching once and re-running classification offline keeps
//! traffic to the registrar site down.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use super::{parse_page, ListingSource};
use crate::error::{DomainSiftError, Result};
use crate::types::Listing;

/// Reads listings from a dump file
#[derive(Debug, Clone)]
pub struct DumpSource {
    path: PathBuf,
}

impl DumpSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode every page line of `content`.
    ///
    /// Lines that do not start with `{` are ignored; lines that fail to
    /// parse are logged and skipped.
    pub fn parse_content(content: &str) -> Vec<Listing> {
        let mut listings = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if !line.starts_with('{') {
                continue;
            }

            let page: Value = match serde_json::from_str(line) {
                Ok(v) => v,
                Err(e) => {
                    tracing::warn!(line = index + 1, error = %e, "Skipping malformed dump line");
                    continue;
                }
            };

            let parsed = parse_page(&page);
            if parsed.skipped > 0 {
                tracing::debug!(line = index + 1, skipped = parsed.skipped, "Skipped undecodable items");
            }
            listings.extend(parsed.listings);
        }

        listings
    }
}

#[async_trait]
impl ListingSource for DumpSource {
    fn describe(&self) -> String {
        format!("dump {}", self.path.display())
    }

    async fn fetch_listings(&mut self) -> Result<Vec<Listing>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainSiftError::io(e.to_string(), Some(self.path.to_string_lossy().to_string()))
        })?;

        let listings = Self::parse_content(&content);
        tracing::info!(path = %self.path.display(), listings = listings.len(), "Dump loaded");
        Ok(listings)
    }
}

/// Appends raw response pages to a dump file
#[derive(Debug)]
pub struct DumpWriter {
    path: PathBuf,
    writer: BufWriter<File>,
    pages: usize,
}

impl DumpWriter {
    /// Create (or truncate) the dump file, making parent directories
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(path.into(), false)
    }

    /// Append to an existing dump file, creating it if needed
    pub fn append(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(path.into(), true)
    }

    fn open(path: PathBuf, append: bool) -> Result<Self> {
        let display = path.to_string_lossy().to_string();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                DomainSiftError::io(e.to_string(), Some(parent.to_string_lossy().to_string()))
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(&path)
            .map_err(|e| DomainSiftError::io(e.to_string(), Some(display)))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            pages: 0,
        })
    }

    /// Write one page as a single line
    pub fn write_page(&mut self, page: &Value) -> Result<()> {
        let line = serde_json::to_string(page)?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        self.pages += 1;
        Ok(())
    }

    pub fn pages_written(&self) -> usize {
        self.pages
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
