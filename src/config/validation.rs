use crate::config::types::{Config, CrawlConfig, ExtractConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound for both the request timeout and the pre-request delay
const MAX_MILLIS: u64 = 600_000;

/// Validates the entire configuration
///
/// A missing seed URL is not an error here; only crawl mode needs one and
/// it reports [`ConfigError::Missing`] when it does.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_extract_config(&config.extract)?;
    validate_output_config(&config.output)?;
    Ok(())
}

fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    if let Some(prefix) = &config.scope_prefix {
        if prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "scope-prefix cannot be empty".to_string(),
            ));
        }
    }

    if let Some(seed) = &config.seed_url {
        validate_http_url(seed)?;
        config.scope()?;
    }

    if config.url_list_path.is_empty() {
        return Err(ConfigError::Validation(
            "url-list-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_extract_config(config: &ExtractConfig) -> Result<(), ConfigError> {
    if config.request_timeout_ms < 1 || config.request_timeout_ms > MAX_MILLIS {
        return Err(ConfigError::Validation(format!(
            "request-timeout-ms must be between 1 and {}, got {}",
            MAX_MILLIS, config.request_timeout_ms
        )));
    }

    if config.delay_ms > MAX_MILLIS {
        return Err(ConfigError::Validation(format!(
            "delay-ms must be <= {}, got {}",
            MAX_MILLIS, config.delay_ms
        )));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Checks that a string is an absolute HTTP(S) URL
fn validate_http_url(candidate: &str) -> Result<(), ConfigError> {
    let url = Url::parse(candidate)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", candidate, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Seed URL '{}' must use HTTP or HTTPS",
            candidate
        )));
    }

    Ok(())
}
