//! HTTP client construction and seed page fetching
//!
//! The seed fetch is the only request whose failure aborts a crawl, so it
//! reports errors through [`HarvestError`] rather than as a value.

use crate::config::{HttpConfig, UserAgentConfig};
use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `http` - Timeouts applied to every request made with the client
///
/// # Example
///
/// ```no_run
/// use sumi_harvest::config::{HttpConfig, UserAgentConfig};
/// use sumi_harvest::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default(), &HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    http: &HttpConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(http.request_timeout_secs))
        .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the seed page and returns its body as text
///
/// # Returns
///
/// * `Ok(String)` - The page body
/// * `Err(HarvestError::SeedStatus)` - The server answered with a non-2xx status
/// * `Err(HarvestError::SeedFetch)` - The request or body read failed
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, HarvestError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| HarvestError::SeedFetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::SeedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| HarvestError::SeedFetch {
            url: url.to_string(),
            source,
        })?;

    tracing::debug!("Fetched seed page {} ({} bytes)", url, body.len());
    Ok(body)
}
