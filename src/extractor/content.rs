//! HTML → text record reduction
//!
//! A pure function of the document text: the same HTML always yields the
//! same title and the same content sequence.

use crate::extractor::types::{ContentItem, ContentKind};
use scraper::{ElementRef, Html, Selector};

/// Title used when a page has no usable `<title>`
pub const NO_TITLE: &str = "No title";

/// Tags collected into the content sequence
const CONTENT_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, a";

/// Title and content extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub content: Vec<ContentItem>,
}

/// Parses a document and reduces it to title plus ordered text records
///
/// Elements are visited in document order. Nested matches are all kept, so a
/// link inside a paragraph produces both a paragraph item and a link item.
/// Elements whose normalized text is empty are skipped.
///
/// # Example
///
/// ```
/// use page_harvest::extractor::{parse_content, ContentKind};
///
/// let page = parse_content("<title>T</title><h1>Hi</h1><p>  some   text </p>");
/// assert_eq!(page.title, "T");
/// assert_eq!(page.content[0].kind, ContentKind::Heading);
/// assert_eq!(page.content[1].text, "some text");
/// ```
pub fn parse_content(html: &str) -> PageContent {
    let document = Html::parse_document(html);

    PageContent {
        title: extract_title(&document),
        content: extract_items(&document),
    }
}

/// First `<title>` text, or [`NO_TITLE`] when absent or blank
fn extract_title(document: &Html) -> String {
    Selector::parse("title")
        .ok()
        .and_then(|selector| document.select(&selector).next().map(normalized_text))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string())
}

fn extract_items(document: &Html) -> Vec<ContentItem> {
    let selector = match Selector::parse(CONTENT_SELECTOR) {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| {
            let text = normalized_text(element);
            if text.is_empty() {
                return None;
            }
            Some(ContentItem::new(
                ContentKind::from_tag(element.value().name()),
                text,
            ))
        })
        .collect()
}

/// Visible text with whitespace runs collapsed and ends trimmed
fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
