//! Registrar search client
//!
//! Opens a session on the search site, reads the CSRF token embedded in the
//! landing page, then walks the paginated search endpoint one page at a
//! time with a fixed pause between requests.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::dump::DumpWriter;
use super::{parse_page, ListingSource};
use crate::config::{FetchConfig, SearchQuery};
use crate::error::{DomainSiftError, Result};
use crate::types::Listing;

static CSRF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"var csrftoken = '([^']+)'").unwrap()
});

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Progress after each fetched page
#[derive(Debug, Clone)]
pub struct PageProgress {
    /// 1-based page number
    pub page: usize,
    pub max_pages: usize,
    pub start: usize,
    pub rows: usize,
    /// Listings collected so far
    pub collected: usize,
    pub records_total: Option<u64>,
}

/// Client for the registrar search endpoint
pub struct RegistrarClient {
    config: FetchConfig,
    client: Client,
    csrf_token: Option<String>,
    dump: Option<DumpWriter>,
}

impl RegistrarClient {
    /// Create a client; no request is made until the first fetch
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()
            .map_err(|e| DomainSiftError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            client,
            csrf_token: None,
            dump: None,
        })
    }

    /// Record every raw response page to `dump`
    pub fn with_dump(mut self, dump: DumpWriter) -> Self {
        self.dump = Some(dump);
        self
    }

    pub fn dump(&self) -> Option<&DumpWriter> {
        self.dump.as_ref()
    }

    fn request_error(&self, err: reqwest::Error) -> DomainSiftError {
        DomainSiftError::from_request(err, self.config.timeout)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Load the landing page and keep its CSRF token.
    ///
    /// Any failure here is fatal: without a token no search is accepted.
    pub async fn open_session(&mut self) -> Result<()> {
        let url = self.url("/");
        tracing::info!(url = %url, "Establishing search session");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainSiftError::session(e.to_string(), None))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainSiftError::session(
                format!("landing page returned HTTP {}", status.as_u16()),
                Some(status.as_u16()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainSiftError::session(e.to_string(), Some(status.as_u16())))?;

        let token = extract_csrf_token(&body).ok_or_else(|| {
            DomainSiftError::session("CSRF token not found on landing page", Some(status.as_u16()))
        })?;

        tracing::debug!(token_prefix = %token.chars().take(8).collect::<String>(), "Got CSRF token");
        self.csrf_token = Some(token);
        Ok(())
    }

    /// Request one page, single attempt
    pub async fn fetch_page(&self, start: usize) -> Result<Value> {
        let token = self
            .csrf_token
            .as_deref()
            .ok_or_else(|| DomainSiftError::session("no session; call open_session first", None))?;

        let url = self.url("/urls/");
        let base = self.config.base_url.trim_end_matches('/');
        let fields = self.config.query.form_fields(start, self.config.page_size);

        let response = self
            .client
            .post(&url)
            .header("accept", "application/json, text/javascript, */*; q=0.01")
            .header("origin", base)
            .header("referer", format!("{}/", base))
            .header("x-csrftoken", token)
            .header("x-requested-with", "XMLHttpRequest")
            .form(&fields)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        let status = response.status();
        match status {
            s if s.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(DomainSiftError::session(
                    format!("search rejected with HTTP {}", status.as_u16()),
                    Some(status.as_u16()),
                ));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.trim().parse::<u64>().ok());
                return Err(DomainSiftError::rate_limit("search endpoint throttled", retry_after));
            }
            _ => {
                return Err(DomainSiftError::network(
                    format!("search returned HTTP {}", status.as_u16()),
                    Some(status.as_u16()),
                    Some(url),
                ));
            }
        }

        let body = response.text().await.map_err(|e| self.request_error(e))?;
        serde_json::from_str(&body).map_err(|e| {
            DomainSiftError::parse(
                format!("search response is not JSON: {}", e),
                Some(body.chars().take(500).collect()),
            )
        })
    }

    /// Request one page, retrying transient failures with exponential backoff
    pub async fn fetch_page_with_retry(&self, start: usize) -> Result<Value> {
        let mut attempt = 0;
        loop {
            match self.fetch_page(start).await {
                Ok(page) => return Ok(page),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let mut delay = backoff_delay(self.config.backoff, attempt);
                    if let DomainSiftError::RateLimit { retry_after: Some(secs), .. } = &e {
                        delay = delay.max(Duration::from_secs(*secs));
                    }
                    tracing::warn!(
                        start,
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Page request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Walk the search results page by page.
    ///
    /// Stops on an empty page, a short page, or after `max_pages`. A page
    /// that still fails after retries ends the walk early, keeping what was
    /// collected; session errors are returned as-is.
    pub async fn fetch_all<F>(&mut self, on_page: F) -> Result<Vec<Listing>>
    where
        F: Fn(&PageProgress) + Send + Sync,
    {
        if self.csrf_token.is_none() {
            self.open_session().await?;
        }

        let page_size = self.config.page_size;
        let mut listings = Vec::new();
        let mut start = 0;

        for page_index in 0..self.config.max_pages {
            if page_index > 0 && !self.config.request_delay.is_zero() {
                tokio::time::sleep(self.config.request_delay).await;
            }

            let page = match self.fetch_page_with_retry(start).await {
                Ok(page) => page,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) if listings.is_empty() => return Err(e),
                Err(e) => {
                    tracing::warn!(start, error = %e, "Stopping page walk early");
                    break;
                }
            };

            if let Some(dump) = self.dump.as_mut() {
                dump.write_page(&page)?;
            }

            let parsed = parse_page(&page);
            let rows = parsed.rows;
            listings.extend(parsed.listings);

            on_page(&PageProgress {
                page: page_index + 1,
                max_pages: self.config.max_pages,
                start,
                rows,
                collected: listings.len(),
                records_total: parsed.records_total,
            });

            tracing::debug!(start, rows, skipped = parsed.skipped, "Fetched page");

            if rows < page_size {
                break;
            }
            start += page_size;
        }

        tracing::info!(listings = listings.len(), "Search walk finished");
        Ok(listings)
    }
}

#[async_trait]
impl ListingSource for RegistrarClient {
    fn describe(&self) -> String {
        format!("registrar search at {}", self.config.base_url)
    }

    async fn fetch_listings(&mut self) -> Result<Vec<Listing>> {
        self.fetch_all(|_| {}).await
    }
}

impl SearchQuery {
    /// Form body for the search endpoint
    pub fn form_fields(&self, start: usize, length: usize) -> Vec<(String, String)> {
        let mut fields: Vec<(String, String)> = vec![
            ("draw".into(), "10".into()),
            ("start".into(), start.to_string()),
            ("length".into(), length.to_string()),
            ("search[value]".into(), String::new()),
            ("search[regex]".into(), "false".into()),
        ];

        let columns = [("0", false), ("length", false), ("price", true), ("price_renewal", true)];
        for (i, (data, orderable)) in columns.iter().enumerate() {
            fields.push((format!("columns[{}][data]", i), data.to_string()));
            fields.push((format!("columns[{}][name]", i), String::new()));
            fields.push((format!("columns[{}][searchable]", i), "true".into()));
            fields.push((format!("columns[{}][orderable]", i), orderable.to_string()));
            fields.push((format!("columns[{}][search][value]", i), String::new()));
            fields.push((format!("columns[{}][search][regex]", i), "false".into()));
        }
        fields.push(("order[0][column]".into(), "2".into()));
        fields.push(("order[0][dir]".into(), "asc".into()));

        fields.push(("domain_length".into(), self.domain_length.to_string()));
        fields.push(("price".into(), self.max_price.to_string()));
        fields.push(("price_renewal".into(), self.max_renewal.to_string()));
        fields.push(("has_number".into(), flag(self.has_number)));
        fields.push(("has_hyphen".into(), flag(self.has_hyphen)));
        fields.push((
            "available".into(),
            if self.available_only { "1".into() } else { String::new() },
        ));
        fields.push(("tlds".into(), tlds_field(&self.tlds)));
        fields.push(("sort".into(), "price".into()));

        fields
    }
}

fn flag(value: Option<bool>) -> String {
    match value {
        Some(true) => "1".into(),
        Some(false) => "0".into(),
        None => String::new(),
    }
}

fn tlds_field(tlds: &[String]) -> String {
    if tlds.is_empty() {
        "null".into()
    } else {
        serde_json::to_string(tlds).unwrap_or_else(|_| "null".into())
    }
}

/// Find the CSRF token assigned in the landing page script
pub fn extract_csrf_token(html: &str) -> Option<String> {
    CSRF_PATTERN
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// `base * 2^attempt` plus up to a quarter of `base` of jitter
fn backoff_delay(base: Duration, attempt: usize) -> Duration {
    let base_ms = base.as_millis() as u64;
    let exp = base_ms.saturating_mul(1u64 << attempt.min(16));
    let jitter = if base_ms >= 4 {
        rand::thread_rng().gen_range(0..=base_ms / 4)
    } else {
        0
    };
    Duration::from_millis(exp.saturating_add(jitter))
}
