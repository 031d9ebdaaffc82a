//! Configuration module for Page-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; command-line flags are layered on top by the binary.
//!
//! # Example
//!
//! ```no_run
//! use page_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("URL list: {}", config.crawl.url_list_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, ExtractConfig, OutputConfig};

// Re-export parser and validation functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate_config;

use crate::url::Scope;
use crate::ConfigError;
use std::time::Duration;
use url::Url;

impl CrawlConfig {
    /// Returns the parsed seed URL, failing if none was configured
    pub fn seed(&self) -> Result<Url, ConfigError> {
        let seed = self
            .seed_url
            .as_deref()
            .ok_or_else(|| ConfigError::Missing("crawl.seed-url".to_string()))?;

        Url::parse(seed)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))
    }

    /// Returns the crawl scope, defaulting to the seed URL itself
    ///
    /// An explicit prefix must contain the seed, otherwise the seed would be
    /// the one recorded URL outside the scope.
    pub fn scope(&self) -> Result<Scope, ConfigError> {
        let seed = self.seed()?;
        let scope = match &self.scope_prefix {
            Some(prefix) => Scope::new(prefix.clone()),
            None => Scope::new(seed.to_string()),
        };

        if !scope.contains(&seed) {
            return Err(ConfigError::Validation(format!(
                "seed-url '{}' is outside scope-prefix '{}'",
                seed,
                scope.prefix()
            )));
        }

        Ok(scope)
    }
}

impl ExtractConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.crawl.url_list_path, "webpages.txt");
        assert_eq!(config.extract.delay(), Duration::from_secs(1));
        assert_eq!(config.extract.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.output.directory, "scraped_content");
    }

    #[test]
    fn test_seed_required() {
        let config = Config::default();
        assert!(matches!(config.crawl.seed(), Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_scope_defaults_to_seed() {
        let mut config = Config::default();
        config.crawl.seed_url = Some("https://example.com".to_string());

        let scope = config.crawl.scope().unwrap();
        assert_eq!(scope.prefix(), "https://example.com/");
    }

    #[test]
    fn test_explicit_scope() {
        let mut config = Config::default();
        config.crawl.seed_url = Some("https://example.com/docs/".to_string());
        config.crawl.scope_prefix = Some("https://example.com/".to_string());

        let scope = config.crawl.scope().unwrap();
        assert_eq!(scope.prefix(), "https://example.com/");
    }

    #[test]
    fn test_seed_outside_scope_rejected() {
        let mut config = Config::default();
        config.crawl.seed_url = Some("https://example.com/home".to_string());
        config.crawl.scope_prefix = Some("https://example.com/docs/".to_string());

        assert!(matches!(
            config.crawl.scope(),
            Err(ConfigError::Validation(_))
        ));
    }
}
