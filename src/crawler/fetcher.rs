//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for both run modes:
//! - Building the HTTP client with the configured per-request timeout
//! - GET requests that follow redirects with the client defaults
//! - Classifying failures into [`FetchError`] variants
//!
//! No retries are attempted anywhere.

use crate::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A fetched HTML document
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Page body content
    pub body: String,
}

/// Builds an HTTP client with the given per-request timeout
///
/// No custom headers are set; redirects follow the reqwest default policy.
///
/// # Example
///
/// ```no_run
/// use page_harvest::crawler::build_http_client;
/// use std::time::Duration;
///
/// let client = build_http_client(Duration::from_secs(10)).unwrap();
/// ```
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body
///
/// # Error Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | URL does not parse | `FetchError::InvalidUrl` |
/// | Request timed out | `FetchError::Timeout` |
/// | Non-2xx status | `FetchError::Status` |
/// | Connection / DNS / TLS failure | `FetchError::Network` |
/// | Body could not be read or decoded | `FetchError::Parse` |
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Parse {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    })?;

    Ok(FetchedPage {
        final_url,
        status_code: status.as_u16(),
        body,
    })
}

/// Maps a reqwest send error onto the fetch error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_builder() {
        FetchError::InvalidUrl {
            url: url.to_string(),
            message: error.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}
