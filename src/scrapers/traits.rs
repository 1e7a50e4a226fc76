use crate::error::Result;
use async_trait::async_trait;

/// Source of raw listing page HTML
/// Implemented over HTTP in production and by fakes in tests
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page body; only a 200 response counts as success
    async fn fetch(&self, url: &str) -> Result<String>;

    /// Get the name of the fetcher
    fn source_name(&self) -> &'static str;
}
