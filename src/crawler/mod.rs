//! Crawler module for same-domain crawling
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the [`Fetcher`] trait
//! - HTML text and link extraction behind the [`PageParser`] trait
//! - The frontier of pending tasks (internal) and the visited set
//! - The crawl engine that ties them together and builds the index

mod engine;
mod fetcher;
mod frontier;
mod outcome;
mod parser;
mod report;
mod visited;

pub use engine::Crawler;
pub use fetcher::{build_http_client, FetchedPage, Fetcher, HttpFetcher};
pub use frontier::CrawlTask;
pub use outcome::PageOutcome;
pub use parser::{parse_html, HtmlParser, PageParser, ParsedPage};
pub use report::{print_statistics, CrawlReport, CrawlStatistics};
pub use visited::VisitedSet;

use crate::config::Config;
use crate::IndexerError;

/// Runs a complete crawl of the configured seed URL
///
/// This is the main entry point for a configured crawl. It will:
/// 1. Build the HTTP client from the configuration
/// 2. Crawl every in-scope page reachable from the seed
/// 3. Return the report holding the index
///
/// # Example
///
/// ```no_run
/// use site_indexer::config::Config;
/// use site_indexer::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = crawl(&Config::default()).await?;
/// let results = report.search("test");
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config) -> Result<CrawlReport, IndexerError> {
    let crawler = Crawler::from_config(config)?;
    crawler.crawl(&config.search.seed_url).await
}
