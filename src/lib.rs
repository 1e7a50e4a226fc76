//! Crawl a single eBay seller page and save each listing as its own JSON file.

pub mod crawler;
pub mod error;
pub mod models;
pub mod scrapers;
pub mod storage;

pub use crawler::{CrawlReport, Crawler};
pub use error::CrawlError;
pub use models::Listing;
