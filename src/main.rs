use anyhow::Context;
use clap::Parser;
use ebay_crawler::scrapers::types::{
    CrawlConfig, DEFAULT_DATA_DIR, DEFAULT_MAX_CONCURRENT_WRITES, DEFAULT_URL,
};
use ebay_crawler::Crawler;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "ebay-crawler", about = "Save every listing on an eBay seller page as JSON")]
struct Cli {
    /// Listing page to crawl
    #[arg(long, env = "CRAWL_URL", default_value = DEFAULT_URL)]
    url: String,

    /// Directory receiving one <item id>.json per listing
    #[arg(long, env = "CRAWL_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Only keep listings with this exact condition (e.g. "New", "Pre-Owned")
    #[arg(long, env = "CRAWL_CONDITION", default_value_t = String::new())]
    condition: String,

    /// Max listing files written at once
    #[arg(long, env = "CRAWL_MAX_WRITES", default_value_t = DEFAULT_MAX_CONCURRENT_WRITES)]
    max_concurrent_writes: usize,

    /// Request timeout in seconds (default: none)
    #[arg(long, env = "CRAWL_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

impl From<Cli> for CrawlConfig {
    fn from(cli: Cli) -> Self {
        Self {
            url: cli.url,
            data_dir: cli.data_dir,
            condition: cli.condition,
            max_concurrent_writes: cli.max_concurrent_writes,
            timeout: cli.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = CrawlConfig::from(Cli::parse());
    let crawler = Crawler::new(config).context("Failed to set up crawler")?;

    info!(url = %crawler.config().url, "Starting the crawling process...");
    let report = crawler.crawl().await.context("Error during crawling")?;

    info!(
        extracted = report.extracted,
        kept = report.kept,
        written = report.written,
        failed = report.failed,
        "✅ Crawling completed successfully"
    );
    Ok(())
}
