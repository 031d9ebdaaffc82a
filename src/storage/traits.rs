//! Sink trait for crawl output
//!
//! The crawler reports every visited URL through a [`UrlSink`] as soon as the
//! page has been fetched, before any of its links are explored.

use url::Url;

/// Destination for URLs discovered by a crawl
pub trait UrlSink {
    /// Records one visited URL
    ///
    /// Implementations backed by a file must make the record durable before
    /// returning, so a crawl that aborts later leaves a truncated but valid list.
    fn record(&mut self, url: &Url) -> std::io::Result<()>;
}

/// In-memory sink, mostly useful for tests
impl UrlSink for Vec<Url> {
    fn record(&mut self, url: &Url) -> std::io::Result<()> {
        self.push(url.clone());
        Ok(())
    }
}
