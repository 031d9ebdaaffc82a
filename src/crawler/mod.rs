//! Crawler module for discovering the pages of one site
//!
//! This module contains:
//! - HTTP fetching with a closed error taxonomy (shared with extraction)
//! - Anchor link extraction
//! - The iterative depth-first traversal

mod fetcher;
mod parser;
mod traversal;

pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use parser::extract_links;
pub use traversal::Crawler;

use crate::config::Config;
use crate::storage::UrlListWriter;
use crate::Result;
use std::path::Path;
use url::Url;

/// Runs crawl mode: seed URL and scope prefix in, URL list file out
///
/// The list file is created (or truncated) before the first fetch and each
/// URL is flushed to it as soon as its page has been fetched.
///
/// # Example
///
/// ```no_run
/// use page_harvest::config::load_config;
/// use page_harvest::crawler::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("harvest.toml"))?;
/// let urls = run_crawl(&config).await?;
/// println!("{} pages", urls.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<Vec<Url>> {
    let seed = config.crawl.seed()?;
    let scope = config.crawl.scope()?;
    let client = build_http_client(config.extract.request_timeout())?;

    let crawler = Crawler::new(client, seed, scope);
    tracing::info!(
        "Crawling from {} within {}",
        crawler.base_url(),
        crawler.scope().prefix()
    );

    let list_path = Path::new(&config.crawl.url_list_path);
    let mut writer = UrlListWriter::create(list_path)?;

    let visited = crawler.crawl(&mut writer).await?;

    tracing::info!(
        "Wrote {} URLs to {}",
        writer.written(),
        list_path.display()
    );

    Ok(visited)
}
