//! Extractor module: one [`PageResult`] per URL
//!
//! Extraction never fails as a whole. Every fetch or decode problem for a
//! single URL is logged and recorded as an error result, and the batch moves
//! on to the next URL.

mod content;
mod types;

pub use content::{parse_content, PageContent, NO_TITLE};
pub use types::{ContentItem, ContentKind, PageOutcome, PageResult};

use crate::config::{Config, ExtractConfig};
use crate::crawler::{build_http_client, fetch_page};
use crate::output::{write_report, ReportStatistics};
use crate::storage::read_url_list;
use crate::{FetchError, Result};
use reqwest::Client;
use std::path::Path;
use std::time::Duration;

/// Fetches pages and reduces them to text records
pub struct Extractor {
    client: Client,
    delay: Duration,
}

impl Extractor {
    /// Creates an extractor
    ///
    /// # Arguments
    ///
    /// * `client` - HTTP client; its timeout bounds every request
    /// * `delay` - Fixed sleep before every fetch
    pub fn new(client: Client, delay: Duration) -> Self {
        Self { client, delay }
    }

    /// Builds an extractor from the `[extract]` settings
    pub fn from_config(config: &ExtractConfig) -> Result<Self> {
        let client = build_http_client(config.request_timeout())?;
        Ok(Self::new(client, config.delay()))
    }

    /// Extracts one URL
    ///
    /// Sleeps for the configured delay first. Failures are logged and become
    /// an error result carrying the failure description.
    pub async fn extract(&self, url: &str) -> PageResult {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.fetch_content(url).await {
            Ok(page) => {
                tracing::debug!("Extracted {} items from {}", page.content.len(), url);
                PageResult::success(url, page.title, page.content)
            }
            Err(e) => {
                tracing::error!("Error scraping {}: {}", url, e);
                PageResult::error(url, e.to_string())
            }
        }
    }

    /// Fetches and parses one URL, keeping the failure cause
    pub async fn fetch_content(&self, url: &str) -> std::result::Result<PageContent, FetchError> {
        let page = fetch_page(&self.client, url).await?;
        Ok(parse_content(&page.body))
    }

    /// Extracts every URL in order
    ///
    /// The result has exactly one entry per input URL, in input order.
    pub async fn extract_all(&self, urls: &[String]) -> Vec<PageResult> {
        let mut results = Vec::with_capacity(urls.len());

        for (index, url) in urls.iter().enumerate() {
            tracing::info!("Extracting [{}/{}] {}", index + 1, urls.len(), url);
            results.push(self.extract(url).await);
        }

        results
    }
}

/// Runs extract mode: URL list file in, three report artifacts out
///
/// # Example
///
/// ```no_run
/// use page_harvest::config::Config;
/// use page_harvest::extractor::run_extraction;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let stats = run_extraction(&Config::default()).await?;
/// println!("{} of {} pages extracted", stats.succeeded, stats.total);
/// # Ok(())
/// # }
/// ```
pub async fn run_extraction(config: &Config) -> Result<ReportStatistics> {
    let list_path = Path::new(&config.crawl.url_list_path);
    let urls = read_url_list(list_path)?;
    tracing::info!("Read {} URLs from {}", urls.len(), list_path.display());

    let extractor = Extractor::from_config(&config.extract)?;
    let results = extractor.extract_all(&urls).await;

    let output_dir = Path::new(&config.output.directory);
    write_report(&results, output_dir)?;

    let stats = ReportStatistics::from_results(&results);
    tracing::info!(
        "Report written to {}: {} succeeded, {} failed",
        output_dir.display(),
        stats.succeeded,
        stats.failed
    );

    Ok(stats)
}
