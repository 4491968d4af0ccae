//! Runtime configuration
//!
//! Values are resolved as defaults, then `SIFT_*` environment variables
//! (a `.env` file is honoured through `init()`), then command line flags.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::StrategyKind;

/// Default registrar search site
pub const DEFAULT_BASE_URL: &str = "https://micro.domains";

/// Server-side price bound sent when the local ceiling is disabled
pub const UNBOUNDED_QUERY_PRICE: u32 = 100_000;

/// Filters sent with every search page request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Length of the second-level label
    pub domain_length: usize,
    /// Upper bound on first-year price
    pub max_price: u32,
    /// Upper bound on renewal price
    pub max_renewal: u32,
    /// `Some(true)` only names with digits, `Some(false)` none, `None` either
    pub has_number: Option<bool>,
    pub has_hyphen: Option<bool>,
    pub available_only: bool,
    /// Empty means every TLD
    pub tlds: Vec<String>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            domain_length: 5,
            max_price: 20,
            max_renewal: 20,
            has_number: None,
            has_hyphen: Some(false),
            available_only: true,
            tlds: Vec::new(),
        }
    }
}

/// Settings for the registrar search client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    pub base_url: String,
    pub page_size: usize,
    pub max_pages: usize,
    /// Pause between consecutive page requests
    pub request_delay: Duration,
    /// Extra attempts after a transient failure
    pub max_retries: usize,
    /// First retry delay; doubles on each further attempt
    pub backoff: Duration,
    pub timeout: Duration,
    pub query: SearchQuery,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 100,
            max_pages: 30,
            request_delay: Duration::from_millis(500),
            max_retries: 3,
            backoff: Duration::from_secs(1),
            timeout: Duration::from_secs(10),
            query: SearchQuery::default(),
        }
    }
}

/// Settings for ranking and report output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Entries shown on the console
    pub top_n: usize,
    /// Listings must be strictly cheaper than this, first year and renewal
    pub max_price: Option<f64>,
    pub output_dir: PathBuf,
    pub json_file: String,
    pub csv_file: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: 50,
            max_price: Some(20.0),
            output_dir: PathBuf::from("output"),
            json_file: "domains_interesting.json".to_string(),
            csv_file: "domains_interesting.csv".to_string(),
        }
    }
}

impl ReportConfig {
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_file)
    }
}

/// Complete configuration for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiftConfig {
    pub strategy: StrategyKind,
    /// Replaces the built-in dictionary words
    pub words_file: Option<PathBuf>,
    /// Replaces the built-in informal words
    pub fun_words_file: Option<PathBuf>,
    pub fetch: FetchConfig,
    pub report: ReportConfig,
}

impl SiftConfig {
    /// Defaults overridden by `SIFT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `SIFT_*` key
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(strategy) = parse_var::<StrategyKind, _>(&lookup, "SIFT_STRATEGY")? {
            config.strategy = strategy;
        }
        if let Some(path) = lookup("SIFT_WORDS_FILE").filter(|v| !v.trim().is_empty()) {
            config.words_file = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("SIFT_FUN_WORDS_FILE").filter(|v| !v.trim().is_empty()) {
            config.fun_words_file = Some(PathBuf::from(path));
        }

        if let Some(top_n) = parse_var(&lookup, "SIFT_TOP_N")? {
            config.report.top_n = top_n;
        }
        if let Some(raw) = lookup("SIFT_MAX_PRICE") {
            config.set_price_ceiling(parse_price_ceiling(&raw)?);
        }
        if let Some(dir) = lookup("SIFT_OUTPUT_DIR").filter(|v| !v.trim().is_empty()) {
            config.report.output_dir = PathBuf::from(dir);
        }

        if let Some(url) = lookup("SIFT_BASE_URL").filter(|v| !v.trim().is_empty()) {
            config.fetch.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(page_size) = parse_var(&lookup, "SIFT_PAGE_SIZE")? {
            config.fetch.page_size = page_size;
        }
        if let Some(max_pages) = parse_var(&lookup, "SIFT_MAX_PAGES")? {
            config.fetch.max_pages = max_pages;
        }
        if let Some(delay_ms) = parse_var::<u64, _>(&lookup, "SIFT_REQUEST_DELAY_MS")? {
            config.fetch.request_delay = Duration::from_millis(delay_ms);
        }
        if let Some(retries) = parse_var(&lookup, "SIFT_MAX_RETRIES")? {
            config.fetch.max_retries = retries;
        }
        if let Some(tlds) = lookup("SIFT_TLDS") {
            config.fetch.query.tlds = split_tlds(&tlds);
        }
        if let Some(raw) = lookup("SIFT_HAS_NUMBER") {
            config.fetch.query.has_number = parse_presence_filter(&raw)?;
        }
        if let Some(raw) = lookup("SIFT_HAS_HYPHEN") {
            config.fetch.query.has_hyphen = parse_presence_filter(&raw)?;
        }

        Ok(config)
    }

    /// Set the local price ceiling and the matching server-side bounds
    pub fn set_price_ceiling(&mut self, ceiling: Option<f64>) {
        self.report.max_price = ceiling;
        let bound = query_price_bound(ceiling);
        self.fetch.query.max_price = bound;
        self.fetch.query.max_renewal = bound;
    }

    /// Reject settings that cannot produce a meaningful run
    pub fn validate(&self) -> Result<()> {
        if self.report.top_n == 0 {
            return Err(crate::validation_error!("top-n must be at least 1"));
        }
        if let Some(ceiling) = self.report.max_price {
            if !ceiling.is_finite() || ceiling <= 0.0 {
                return Err(crate::validation_error!("max price must be positive, got {}", ceiling));
            }
        }
        if self.fetch.page_size == 0 {
            return Err(crate::validation_error!("page size must be at least 1"));
        }
        if self.fetch.max_pages == 0 {
            return Err(crate::validation_error!("max pages must be at least 1"));
        }
        if !self.fetch.base_url.starts_with("http://") && !self.fetch.base_url.starts_with("https://") {
            return Err(crate::validation_error!(
                "base url must start with http:// or https://, got '{}'",
                self.fetch.base_url
            ));
        }
        Ok(())
    }
}

/// `none`/`off` disable the ceiling; anything else must be a number
pub fn parse_price_ceiling(raw: &str) -> Result<Option<f64>> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("none") || raw.eq_ignore_ascii_case("off") {
        return Ok(None);
    }
    raw.parse::<f64>()
        .map(Some)
        .map_err(|_| crate::config_error!("invalid price ceiling '{}'", raw))
}

/// Whole-unit server bound covering every price below `ceiling`
fn query_price_bound(ceiling: Option<f64>) -> u32 {
    match ceiling {
        Some(c) if c.is_finite() && c > 0.0 => c.ceil().min(UNBOUNDED_QUERY_PRICE as f64) as u32,
        _ => UNBOUNDED_QUERY_PRICE,
    }
}

/// `yes`/`1` only with, `no`/`0` only without, `any` or empty either way
pub fn parse_presence_filter(raw: &str) -> Result<Option<bool>> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "any" => Ok(None),
        "1" | "yes" | "true" => Ok(Some(true)),
        "0" | "no" | "false" => Ok(Some(false)),
        other => Err(crate::config_error!(
            "invalid filter '{}', expected yes, no or any",
            other
        )),
    }
}

/// Split a comma separated TLD list, dropping leading dots
pub fn split_tlds(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().trim_start_matches('.').to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| crate::config_error!("invalid value '{}' for {}", raw, key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainSiftError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiftConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.strategy, StrategyKind::Lexicon);
        assert_eq!(config.report.top_n, 50);
        assert_eq!(config.report.max_price, Some(20.0));
        assert_eq!(config.fetch.query.domain_length, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = SiftConfig::from_lookup(lookup_from(&[
            ("SIFT_STRATEGY", "composite"),
            ("SIFT_TOP_N", "10"),
            ("SIFT_MAX_PRICE", "none"),
            ("SIFT_BASE_URL", "http://localhost:8080/"),
            ("SIFT_REQUEST_DELAY_MS", "0"),
            ("SIFT_TLDS", ".com, io,,"),
        ]))
        .unwrap();

        assert_eq!(config.strategy, StrategyKind::Composite);
        assert_eq!(config.report.top_n, 10);
        assert_eq!(config.report.max_price, None);
        assert_eq!(config.fetch.base_url, "http://localhost:8080");
        assert_eq!(config.fetch.request_delay, Duration::ZERO);
        assert_eq!(config.fetch.query.tlds, vec!["com".to_string(), "io".to_string()]);
    }

    #[test]
    fn test_malformed_value_is_config_error() {
        let err = SiftConfig::from_lookup(lookup_from(&[("SIFT_TOP_N", "many")])).unwrap_err();
        assert!(matches!(err, DomainSiftError::Config { .. }));

        let err = SiftConfig::from_lookup(lookup_from(&[("SIFT_STRATEGY", "magic")])).unwrap_err();
        assert!(err.to_string().contains("magic"));
    }

    #[test]
    fn test_validate_rejects_zero_top_n() {
        let mut config = SiftConfig::default();
        config.report.top_n = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = SiftConfig::default();
        config.fetch.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_price_ceiling_reaches_search_query() {
        let config = SiftConfig::from_lookup(lookup_from(&[("SIFT_MAX_PRICE", "49.5")])).unwrap();
        assert_eq!(config.report.max_price, Some(49.5));
        assert_eq!(config.fetch.query.max_price, 50);
        assert_eq!(config.fetch.query.max_renewal, 50);

        let fields = config.fetch.query.form_fields(0, 100);
        assert!(fields.iter().any(|(k, v)| k == "price" && v == "50"));
        assert!(fields.iter().any(|(k, v)| k == "price_renewal" && v == "50"));

        let mut config = SiftConfig::default();
        config.set_price_ceiling(None);
        assert_eq!(config.report.max_price, None);
        assert_eq!(config.fetch.query.max_price, UNBOUNDED_QUERY_PRICE);
    }

    #[test]
    fn test_presence_filters() {
        let config = SiftConfig::from_lookup(lookup_from(&[
            ("SIFT_HAS_NUMBER", "yes"),
            ("SIFT_HAS_HYPHEN", "any"),
        ]))
        .unwrap();
        assert_eq!(config.fetch.query.has_number, Some(true));
        assert_eq!(config.fetch.query.has_hyphen, None);

        assert_eq!(parse_presence_filter("0").unwrap(), Some(false));
        assert!(parse_presence_filter("maybe").is_err());
    }

    #[test]
    fn test_validate_reports_validation_error() {
        let mut config = SiftConfig::default();
        config.fetch.page_size = 0;
        assert!(matches!(config.validate(), Err(DomainSiftError::Validation { .. })));
    }

    #[test]
    fn test_price_ceiling_parse() {
        assert_eq!(parse_price_ceiling("12.5").unwrap(), Some(12.5));
        assert_eq!(parse_price_ceiling("OFF").unwrap(), None);
        assert!(parse_price_ceiling("cheap").is_err());
    }
}
