//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with proper user agent strings and timeouts
//! - GET requests to fetch page content
//! - Error classification (timeouts vs. other transport failures)
//!
//! The crawl engine only sees the [`Fetcher`] trait, so tests can substitute
//! an in-memory implementation.

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::FetchError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A page returned by a [`Fetcher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Final URL after any redirects the transport followed
    pub final_url: String,

    /// HTTP status code
    pub status: u16,

    /// Content-Type header value, if the response carried one
    pub content_type: Option<String>,

    /// Response body decoded as text; left empty for non-HTML responses
    pub body: String,
}

impl FetchedPage {
    /// Returns true if the Content-Type indicates HTML (case-insensitive)
    ///
    /// A response without a Content-Type header is not treated as HTML.
    pub fn is_html(&self) -> bool {
        is_html_content_type(self.content_type.as_deref())
    }

    /// Returns true for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn is_html_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("html"))
}

/// Retrieves the content behind a URL
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches `url`, returning the page or the transport failure
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError>;
}

/// [`Fetcher`] backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Wraps an already configured client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher from crawler and user agent configuration
    pub fn from_config(
        crawler: &CrawlerConfig,
        user_agent: &UserAgentConfig,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(crawler, user_agent)?))
    }
}

/// Builds an HTTP client with proper configuration
///
/// Redirects follow reqwest's default policy; there is no retry layer.
///
/// # Example
///
/// ```no_run
/// use site_indexer::config::{CrawlerConfig, UserAgentConfig};
/// use site_indexer::crawler::build_http_client;
///
/// let client = build_http_client(&CrawlerConfig::default(), &UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(
    crawler: &CrawlerConfig,
    user_agent: &UserAgentConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(Duration::from_secs(crawler.request_timeout_secs))
        .connect_timeout(Duration::from_secs(crawler.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_error(url, e, false))?;

        let status = response.status();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        // Non-HTML bodies are never parsed, so they are not downloaded
        if !is_html_content_type(content_type.as_deref()) {
            return Ok(FetchedPage {
                final_url,
                status: status.as_u16(),
                content_type,
                body: String::new(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_error(url, e, true))?;

        Ok(FetchedPage {
            final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }
}

/// Maps a reqwest error onto the crawler's transport error taxonomy
fn classify_error(url: &Url, error: reqwest::Error, reading_body: bool) -> FetchError {
    let url = url.to_string();
    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if reading_body {
        FetchError::Body { url, source: error }
    } else {
        FetchError::Transport { url, source: error }
    }
}
