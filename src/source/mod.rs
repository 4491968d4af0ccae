//! Listing sources
//!
//! A source supplies `Listing` records to the pipeline. The classifier does
//! not care where they come from: a saved dump of search responses or the
//! live registrar search endpoint.

pub mod dump;
pub mod registrar;

pub use dump::{DumpSource, DumpWriter};
pub use registrar::{PageProgress, RegistrarClient};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::types::Listing;

/// Trait for anything that can produce listings
#[async_trait]
pub trait ListingSource: Send {
    /// Short human readable description for logs
    fn describe(&self) -> String;

    /// Produce every listing the source has
    async fn fetch_listings(&mut self) -> Result<Vec<Listing>>;
}

/// Listings decoded from one search response page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    pub listings: Vec<Listing>,
    /// Items present in the page, decodable or not
    pub rows: usize,
    /// Items that could not be decoded
    pub skipped: usize,
    /// Total matches reported by the server
    pub records_total: Option<u64>,
}

/// Decode a search response page.
///
/// Two shapes are understood: a `urls` array of objects with `domain`,
/// `tld`, `price`, `price_renewal`, and a `data` array of
/// `[full_domain, length, price, renewal]` rows.
pub fn parse_page(page: &Value) -> ParsedPage {
    let records_total = page.get("recordsTotal").and_then(as_u64);

    let (items, decode): (&[Value], fn(&Value) -> Option<Listing>) =
        if let Some(urls) = page.get("urls").and_then(|u| u.as_array()) {
            (urls.as_slice(), listing_from_url_item)
        } else if let Some(rows) = page.get("data").and_then(|d| d.as_array()) {
            (rows.as_slice(), listing_from_data_row)
        } else {
            (&[], listing_from_url_item)
        };

    let mut parsed = ParsedPage {
        rows: items.len(),
        records_total,
        ..Default::default()
    };

    for item in items {
        match decode(item) {
            Some(listing) => parsed.listings.push(listing),
            None => parsed.skipped += 1,
        }
    }

    parsed
}

fn listing_from_url_item(item: &Value) -> Option<Listing> {
    let name = item.get("domain")?.as_str()?.trim();
    let tld = item.get("tld")?.as_str()?.trim().trim_start_matches('.');
    let price = item.get("price").and_then(as_price)?;
    let renewal = item.get("price_renewal").and_then(as_price)?;

    if name.is_empty() || tld.is_empty() {
        return None;
    }
    Some(Listing::new(name, tld, price, renewal))
}

fn listing_from_data_row(row: &Value) -> Option<Listing> {
    let (domain, price, renewal) = match row {
        Value::Array(cells) => (
            cells.first()?.as_str()?,
            cells.get(2).and_then(as_price)?,
            cells.get(3).and_then(as_price)?,
        ),
        Value::Object(_) => (
            row.get("0")?.as_str()?,
            row.get("price").and_then(as_price)?,
            row.get("price_renewal").and_then(as_price)?,
        ),
        _ => return None,
    };

    let (name, tld) = domain.trim().split_once('.')?;
    if name.is_empty() || tld.is_empty() {
        return None;
    }
    Some(Listing::new(name, tld, price, renewal))
}

/// Prices arrive as numbers or numeric strings
fn as_price(value: &Value) -> Option<f64> {
    let price = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (price.is_finite() && price >= 0.0).then_some(price)
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
