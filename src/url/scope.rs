use url::Url;

/// The in-scope boundary of a crawl
///
/// A URL is in scope iff its absolute serialized form starts with the prefix.
///
/// # Examples
///
/// ```
/// use page_harvest::url::Scope;
/// use url::Url;
///
/// let scope = Scope::new("https://example.com/docs/");
/// assert!(scope.contains(&Url::parse("https://example.com/docs/intro").unwrap()));
/// assert!(!scope.contains(&Url::parse("https://example.com/blog/").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    prefix: String,
}

impl Scope {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns true if the URL falls inside this scope
    pub fn contains(&self, url: &Url) -> bool {
        url.as_str().starts_with(&self.prefix)
    }
}
