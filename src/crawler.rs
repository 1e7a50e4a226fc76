use crate::error::Result;
use crate::scrapers::{
    filter_by_condition, CrawlConfig, HttpFetcher, ListingExtractor, ListingSelectors,
    PageFetcher,
};
use crate::storage;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// Outcome of a crawl that got past fetching and extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Listings found on the page
    pub extracted: usize,
    /// Listings left after the condition filter
    pub kept: usize,
    /// Files written successfully
    pub written: usize,
    /// Listings whose write failed (logged, not fatal)
    pub failed: usize,
}

/// Fetches one listing page and writes every listing on it to disk
pub struct Crawler<F = HttpFetcher> {
    config: CrawlConfig,
    fetcher: F,
    extractor: ListingExtractor,
}

impl Crawler<HttpFetcher> {
    /// Create an HTTP crawler using the default eBay selectors
    pub fn new(config: CrawlConfig) -> Result<Self> {
        let fetcher = HttpFetcher::with_timeout(config.timeout)?;
        Self::with_fetcher(config, fetcher, &ListingSelectors::default())
    }
}

impl<F: PageFetcher> Crawler<F> {
    /// Create a crawler with a custom fetcher and selector set
    pub fn with_fetcher(
        config: CrawlConfig,
        fetcher: F,
        selectors: &ListingSelectors,
    ) -> Result<Self> {
        Ok(Self {
            config,
            fetcher,
            extractor: ListingExtractor::new(selectors)?,
        })
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Run the crawl.
    ///
    /// Fetch and extraction failures are returned as errors. Individual write
    /// failures are logged and counted in the report only.
    pub async fn crawl(&self) -> Result<CrawlReport> {
        info!(
            url = %self.config.url,
            source = self.fetcher.source_name(),
            "Starting crawl"
        );

        let html = self.fetcher.fetch(&self.config.url).await?;
        let listings = self.extractor.extract_from_str(&html);
        let extracted = listings.len();

        let listings = filter_by_condition(listings, &self.config.condition);
        let kept = listings.len();
        if !self.config.condition.is_empty() {
            info!(
                condition = %self.config.condition,
                "Kept {} of {} listings", kept, extracted
            );
        }

        if listings.is_empty() {
            warn!("No listings to write");
            return Ok(CrawlReport {
                extracted,
                ..CrawlReport::default()
            });
        }

        let data_dir = Arc::new(self.config.data_dir.clone());
        if let Err(e) = storage::ensure_dir(&data_dir).await {
            warn!("Could not prepare data directory: {}", e);
        }

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_writes.max(1)));
        let handles: Vec<_> = listings
            .into_iter()
            .map(|listing| {
                let sem = semaphore.clone();
                let dir = data_dir.clone();
                tokio::spawn(async move {
                    let _permit = sem.acquire().await.ok();
                    storage::write_listing(&listing, &dir).await
                })
            })
            .collect();

        let mut report = CrawlReport {
            extracted,
            kept,
            ..CrawlReport::default()
        };
        for result in join_all(handles).await {
            match result {
                Ok(Ok(_)) => report.written += 1,
                Ok(Err(e)) => {
                    error!("Failed to write listing data to file: {}", e);
                    report.failed += 1;
                }
                Err(e) => {
                    error!("Write task did not complete: {}", e);
                    report.failed += 1;
                }
            }
        }

        info!(
            "💾 Saved {} listing files to {} ({} failed)",
            report.written,
            data_dir.display(),
            report.failed
        );
        Ok(report)
    }
}
