use serde::Deserialize;

/// Main configuration structure for Page-Harvest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawl mode configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Absolute URL the crawl starts from; links are resolved against it
    #[serde(rename = "seed-url", default)]
    pub seed_url: Option<String>,

    /// Prefix a resolved link must start with to be followed
    #[serde(rename = "scope-prefix", default)]
    pub scope_prefix: Option<String>,

    /// File the discovered URLs are written to
    #[serde(rename = "url-list-path", default = "default_url_list_path")]
    pub url_list_path: String,
}

/// Extract mode configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Fixed sleep before every extraction request (milliseconds)
    #[serde(rename = "delay-ms", default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Per-request timeout (milliseconds)
    #[serde(rename = "request-timeout-ms", default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving content.json, content.txt and content.pdf
    #[serde(default = "default_output_directory")]
    pub directory: String,
}

fn default_url_list_path() -> String {
    "webpages.txt".to_string()
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_output_directory() -> String {
    "scraped_content".to_string()
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed_url: None,
            scope_prefix: None,
            url_list_path: default_url_list_path(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}
