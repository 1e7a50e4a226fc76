use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Seller page crawled when nothing else is configured
pub const DEFAULT_URL: &str = "https://www.ebay.com/sch/i.html?_ssn=garlandcomputer";

/// Directory listings are written to by default
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Upper bound on listing writes in flight at once
pub const DEFAULT_MAX_CONCURRENT_WRITES: usize = 16;

/// Parameters for a single crawl run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// Listing page to fetch
    pub url: String,
    /// Directory receiving one JSON file per listing
    pub data_dir: PathBuf,
    /// Keep only listings with exactly this condition; empty keeps all
    pub condition: String,
    /// Maximum number of concurrent file writes
    pub max_concurrent_writes: usize,
    /// Request timeout; `None` keeps the client default (no timeout)
    pub timeout: Option<Duration>,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            condition: String::new(),
            max_concurrent_writes: DEFAULT_MAX_CONCURRENT_WRITES,
            timeout: None,
        }
    }
}

/// CSS selectors locating a listing and its fields.
///
/// Field selectors are evaluated relative to each container match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingSelectors {
    pub container: String,
    pub title: String,
    pub price: String,
    pub link: String,
    /// Attribute of the `link` match holding the listing URL
    pub link_attr: String,
    pub condition: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            container: ".s-item__wrapper".to_string(),
            title: ".s-item__title span".to_string(),
            price: ".s-item__price".to_string(),
            link: ".s-item__image a".to_string(),
            link_attr: "href".to_string(),
            condition: ".s-item__subtitle .SECONDARY_INFO".to_string(),
        }
    }
}
