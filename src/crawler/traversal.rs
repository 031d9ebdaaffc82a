//! Depth-first site traversal
//!
//! The walk is iterative: each stack frame holds the remaining links of one
//! visited page. Taking the next unvisited in-scope link from the top frame
//! and visiting it before touching the rest of that frame yields exactly the
//! pre-order of a recursive depth-first walk, without growing the call stack.

use crate::crawler::fetcher::fetch_page;
use crate::crawler::parser::extract_links;
use crate::storage::UrlSink;
use crate::url::Scope;
use crate::{ConfigError, Result};
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Crawls one site from a seed URL
///
/// The visited set lives only for the duration of a single [`Crawler::crawl`]
/// call, so one `Crawler` can run several independent crawls.
pub struct Crawler {
    client: Client,
    base_url: Url,
    scope: Scope,
}

impl Crawler {
    /// Creates a crawler
    ///
    /// # Arguments
    ///
    /// * `client` - HTTP client used for every page fetch
    /// * `base_url` - Seed URL; also the base every href is resolved against
    /// * `scope` - Links outside this scope are never followed
    pub fn new(client: Client, base_url: Url, scope: Scope) -> Self {
        Self {
            client,
            base_url,
            scope,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Runs the crawl, reporting each visited URL to `sink` as it happens
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Url>)` - Visited URLs in pre-order, seed first, no duplicates
    /// * `Err(HarvestError)` - The seed is outside the scope (nothing is
    ///   fetched), or the first fetch or sink failure; the crawl stops
    ///   immediately and whatever the sink already recorded stays recorded
    pub async fn crawl<S: UrlSink>(&self, sink: &mut S) -> Result<Vec<Url>> {
        if !self.scope.contains(&self.base_url) {
            return Err(ConfigError::Validation(format!(
                "seed-url '{}' is outside scope-prefix '{}'",
                self.base_url,
                self.scope.prefix()
            ))
            .into());
        }

        let mut visited: HashSet<Url> = HashSet::new();
        let mut order: Vec<Url> = Vec::new();

        let seed = self.base_url.clone();
        let links = self.visit(&seed, &mut visited, sink).await?;
        order.push(seed);

        let mut stack = vec![links.into_iter()];

        while let Some(frame) = stack.last_mut() {
            let next = frame.find(|link| {
                let eligible = self.scope.contains(link) && !visited.contains(link);
                if !eligible {
                    tracing::trace!("Skipping {}", link);
                }
                eligible
            });

            match next {
                Some(link) => {
                    let links = self.visit(&link, &mut visited, sink).await?;
                    order.push(link);
                    stack.push(links.into_iter());
                }
                None => {
                    stack.pop();
                }
            }
        }

        tracing::info!("Crawl finished: {} pages visited", order.len());
        Ok(order)
    }

    /// Marks, fetches and records one page, returning its outgoing links
    async fn visit<S: UrlSink>(
        &self,
        url: &Url,
        visited: &mut HashSet<Url>,
        sink: &mut S,
    ) -> Result<Vec<Url>> {
        visited.insert(url.clone());

        let page = fetch_page(&self.client, url.as_str()).await?;
        sink.record(url)?;

        if page.final_url == url.as_str() {
            tracing::info!("Visited {} (HTTP {})", url, page.status_code);
        } else {
            tracing::info!(
                "Visited {} via {} (HTTP {})",
                url,
                page.final_url,
                page.status_code
            );
        }

        let links = extract_links(&page.body, &self.base_url);
        tracing::debug!("{} links on {}", links.len(), url);

        Ok(links)
    }
}
