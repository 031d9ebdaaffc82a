//! Page-Harvest: a single-site crawler and content extractor
//!
//! This crate crawls the internal link graph of one website, extracts the
//! headings and paragraphs of every discovered page, and writes the results
//! as JSON, plain text and a paginated PDF document.

pub mod config;
pub mod crawler;
pub mod extractor;
pub mod output;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for Page-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Missing required setting: {0}")]
    Missing(String),
}

/// Reasons a single page fetch can fail
///
/// Crawl mode treats every variant as fatal. Extract mode records the
/// `Display` text of the variant in an error [`extractor::PageResult`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("Failed to read response body from {url}: {message}")]
    Parse { url: String, message: String },
}

/// Result type alias for Page-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_crawl, Crawler};
pub use extractor::{run_extraction, ContentItem, ContentKind, Extractor, PageOutcome, PageResult};
pub use output::{write_report, ReportStatistics};
pub use crate::url::Scope;
