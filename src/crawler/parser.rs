//! Anchor link extraction for the crawler
//!
//! Every `<a href>` is resolved against a fixed base URL, in document order.
//! Scope filtering is left to the traversal.

use scraper::{Html, Selector};
use url::Url;

/// Extracts all anchor links from an HTML document
///
/// Links are resolved against `base_url`, which for a crawl is always the
/// seed URL rather than the page the link was found on. Hrefs that cannot be
/// joined are dropped. Duplicates are kept; the traversal skips them.
///
/// # Example
///
/// ```
/// use page_harvest::crawler::extract_links;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let links = extract_links(html, &base_url);
/// assert_eq!(links[0].as_str(), "https://example.com/page");
/// ```
pub fn extract_links(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                match base_url.join(href.trim()) {
                    Ok(absolute) => links.push(absolute),
                    Err(e) => tracing::trace!("Skipping unresolvable href {:?}: {}", href, e),
                }
            }
        }
    }

    links
}
