//! Integration tests for Site-Indexer
//!
//! These tests use wiremock to create mock HTTP servers and run the real
//! HTTP fetcher and HTML parser end-to-end.

mod crawl_tests;
mod search_tests;

use site_indexer::config::CrawlerConfig;
use site_indexer::crawler::Crawler;
use wiremock::ResponseTemplate;

/// A 200 response carrying an HTML body
pub fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html; charset=utf-8")
}

/// A crawler with default limits and short timeouts
pub fn test_crawler() -> Crawler {
    crawler_with(CrawlerConfig {
        request_timeout_secs: 5,
        connect_timeout_secs: 2,
        ..CrawlerConfig::default()
    })
}

pub fn crawler_with(crawler: CrawlerConfig) -> Crawler {
    let config = site_indexer::Config {
        crawler,
        ..site_indexer::Config::default()
    };
    Crawler::from_config(&config).expect("Failed to build crawler")
}
