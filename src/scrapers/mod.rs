pub mod ebay;
pub mod http;
pub mod traits;
pub mod types;

pub use ebay::{filter_by_condition, ListingExtractor};
pub use http::HttpFetcher;
pub use traits::PageFetcher;
pub use types::{CrawlConfig, ListingSelectors};
