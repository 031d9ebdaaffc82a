//! Extraction result types
//!
//! These serialize to the stable JSON shape of `content.json`:
//!
//! ```json
//! { "url": "...", "status": "success", "title": "...", "content": [{ "type": "heading", "text": "..." }] }
//! { "url": "...", "status": "error", "error": "..." }
//! ```

use serde::{Deserialize, Serialize};

/// Kind of an extracted text fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Text from `h1`..`h6`
    Heading,
    /// Text from `p` and `a`
    Paragraph,
}

impl ContentKind {
    /// Classifies a tag name: anything starting with `h` is a heading
    pub fn from_tag(tag: &str) -> Self {
        if tag.starts_with('h') {
            Self::Heading
        } else {
            Self::Paragraph
        }
    }
}

/// One extracted text fragment, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub text: String,
}

impl ContentItem {
    pub fn new(kind: ContentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Outcome of extracting one URL
///
/// A success always carries a title and content; an error carries only the
/// error description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PageOutcome {
    Success {
        title: String,
        content: Vec<ContentItem>,
    },
    Error {
        error: String,
    },
}

/// The per-URL extraction record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub url: String,
    #[serde(flatten)]
    pub outcome: PageOutcome,
}

impl PageResult {
    pub fn success(url: impl Into<String>, title: impl Into<String>, content: Vec<ContentItem>) -> Self {
        Self {
            url: url.into(),
            outcome: PageOutcome::Success {
                title: title.into(),
                content,
            },
        }
    }

    pub fn error(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            outcome: PageOutcome::Error {
                error: error.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, PageOutcome::Success { .. })
    }

    pub fn title(&self) -> Option<&str> {
        match &self.outcome {
            PageOutcome::Success { title, .. } => Some(title),
            PageOutcome::Error { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&[ContentItem]> {
        match &self.outcome {
            PageOutcome::Success { content, .. } => Some(content),
            PageOutcome::Error { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.outcome {
            PageOutcome::Success { .. } => None,
            PageOutcome::Error { error } => Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_tag() {
        for tag in ["h1", "h2", "h3", "h4", "h5", "h6"] {
            assert_eq!(ContentKind::from_tag(tag), ContentKind::Heading);
        }
        assert_eq!(ContentKind::from_tag("p"), ContentKind::Paragraph);
        assert_eq!(ContentKind::from_tag("a"), ContentKind::Paragraph);
    }

    #[test]
    fn test_success_json_shape() {
        let result = PageResult::success(
            "https://example.com/",
            "Home",
            vec![
                ContentItem::new(ContentKind::Heading, "Welcome"),
                ContentItem::new(ContentKind::Paragraph, "Hello there"),
            ],
        );

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "https://example.com/",
                "status": "success",
                "title": "Home",
                "content": [
                    { "type": "heading", "text": "Welcome" },
                    { "type": "paragraph", "text": "Hello there" }
                ]
            })
        );
    }

    #[test]
    fn test_error_json_has_no_title_or_content() {
        let result = PageResult::error("https://example.com/x", "HTTP 500 for https://example.com/x");

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "url": "https://example.com/x",
                "status": "error",
                "error": "HTTP 500 for https://example.com/x"
            })
        );
    }

    #[test]
    fn test_deserialize_back() {
        let text = r#"[
            {"url": "https://a/", "status": "success", "title": "A", "content": []},
            {"url": "https://b/", "status": "error", "error": "boom"}
        ]"#;
        let results: Vec<PageResult> = serde_json::from_str(text).unwrap();

        assert!(results[0].is_success());
        assert_eq!(results[0].title(), Some("A"));
        assert_eq!(results[0].content().map(<[_]>::len), Some(0));
        assert!(!results[1].is_success());
        assert_eq!(results[1].error_message(), Some("boom"));
        assert_eq!(results[1].title(), None);
    }
}
