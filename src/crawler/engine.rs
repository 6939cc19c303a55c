//! Crawl engine - main crawl loop
//!
//! The engine owns all state of a crawl run and drives it to completion:
//! - Takes the next task from the frontier
//! - Marks its URL visited before any I/O
//! - Fetches the page and checks that it is HTML
//! - Indexes the page text
//! - Resolves links against the seed and queues those in scope
//!
//! Failures are confined to the task that hit them; the loop only ends when
//! the frontier is empty or the page budget runs out.

use crate::config::{Config, CrawlerConfig};
use crate::crawler::fetcher::{Fetcher, HttpFetcher};
use crate::crawler::frontier::{CrawlTask, Frontier};
use crate::crawler::outcome::PageOutcome;
use crate::crawler::parser::{HtmlParser, PageParser};
use crate::crawler::report::{CrawlReport, CrawlStatistics};
use crate::crawler::visited::VisitedSet;
use crate::index::Index;
use crate::url::{classify_link, parse_seed, LinkTarget};
use crate::IndexerError;
use indexmap::IndexSet;
use std::time::Instant;

/// State of a single crawl run
struct CrawlRun {
    frontier: Frontier,
    visited: VisitedSet,
    index: Index,
    outcomes: Vec<(String, PageOutcome)>,
    statistics: CrawlStatistics,
}

impl CrawlRun {
    fn record(&mut self, url: &str, outcome: PageOutcome) {
        self.statistics.record(&outcome);
        self.outcomes.push((url.to_string(), outcome));
    }
}

/// Same-domain crawler
///
/// A `Crawler` holds only its collaborators and limits; each call to
/// [`Crawler::crawl`] builds and returns its own state, so one crawler can
/// serve several runs.
pub struct Crawler<F: Fetcher = HttpFetcher, P: PageParser = HtmlParser> {
    fetcher: F,
    parser: P,
    config: CrawlerConfig,
}

impl Crawler<HttpFetcher, HtmlParser> {
    /// Creates a crawler with the HTTP fetcher and HTML parser
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to crawl
    /// * `Err(IndexerError)` - The HTTP client could not be built
    pub fn from_config(config: &Config) -> Result<Self, IndexerError> {
        let fetcher = HttpFetcher::from_config(&config.crawler, &config.user_agent)?;
        Ok(Self::new(fetcher, HtmlParser, config.crawler.clone()))
    }
}

impl<F: Fetcher, P: PageParser> Crawler<F, P> {
    pub fn new(fetcher: F, parser: P, config: CrawlerConfig) -> Self {
        Self {
            fetcher,
            parser,
            config,
        }
    }

    /// Crawls everything reachable from `seed` on the seed's network location
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlReport)` - The (possibly partial) index and visited set
    /// * `Err(IndexerError)` - The seed is not an absolute http(s) URL
    ///
    /// # Example
    ///
    /// ```no_run
    /// use site_indexer::config::Config;
    /// use site_indexer::crawler::Crawler;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let crawler = Crawler::from_config(&Config::default())?;
    /// let report = crawler.crawl("https://example.com").await?;
    /// println!("{} pages indexed", report.index.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn crawl(&self, seed: &str) -> Result<CrawlReport, IndexerError> {
        let seed = parse_seed(seed)?;
        tracing::info!("Starting crawl of {}", seed);

        let start_time = Instant::now();
        let mut run = CrawlRun {
            frontier: Frontier::new(self.config.traversal),
            visited: VisitedSet::new(),
            index: Index::new(),
            outcomes: Vec::new(),
            statistics: CrawlStatistics::start(),
        };
        run.frontier.push(CrawlTask::seed(seed));

        while let Some(task) = run.frontier.next_task() {
            let exhausted = self.config.max_pages.filter(|&max| run.visited.len() >= max);
            if let Some(max_pages) = exhausted {
                // The popped task is pending too; already-visited URLs are not
                let pending: IndexSet<String> = std::iter::once(task)
                    .chain(run.frontier.drain())
                    .filter(|t| !run.visited.contains(t.url.as_str()))
                    .map(|t| t.url.into())
                    .collect();
                if !pending.is_empty() {
                    tracing::warn!(
                        "Page budget of {} reached, discarding {} pending URLs",
                        max_pages,
                        pending.len()
                    );
                    run.statistics.budget_exhausted = true;
                    run.statistics.tasks_discarded = pending.len();
                }
                break;
            }

            if !run.visited.insert(&task.url) {
                continue;
            }

            self.process_task(&mut run, task).await;

            let visited = run.visited.len();
            if visited % 10 == 0 {
                let rate = visited as f64 / start_time.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {} pages visited, {} in frontier, {:.2} pages/sec",
                    visited,
                    run.frontier.len(),
                    rate
                );
            }
        }

        run.statistics.pages_visited = run.visited.len();
        run.statistics.duration = start_time.elapsed();

        tracing::info!(
            "Crawl completed: {} pages visited, {} indexed in {:?}",
            run.statistics.pages_visited,
            run.statistics.pages_indexed,
            run.statistics.duration
        );

        Ok(CrawlReport {
            index: run.index,
            visited: run.visited,
            outcomes: run.outcomes,
            statistics: run.statistics,
        })
    }

    /// Processes a single task whose URL has just been marked visited
    async fn process_task(&self, run: &mut CrawlRun, task: CrawlTask) {
        let url = task.url.as_str();
        tracing::debug!("Processing URL: {} (depth {})", url, task.depth);

        let page = match self.fetcher.fetch(&task.url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!("Error crawling {}: {}", url, e);
                run.record(url, PageOutcome::FetchFailed {
                    error: e.to_string(),
                });
                return;
            }
        };

        if !page.is_success() {
            tracing::debug!("{} answered with HTTP {}", url, page.status);
        }

        if page.final_url != url {
            tracing::debug!("{} redirected to {}", url, page.final_url);
        }

        if !page.is_html() {
            tracing::warn!(
                "Skipping non-HTML content: {} ({})",
                url,
                page.content_type.as_deref().unwrap_or("no content type")
            );
            run.record(url, PageOutcome::SkippedNonHtml {
                content_type: page.content_type,
            });
            return;
        }

        let parsed = self.parser.parse(&page.body);
        run.index.insert(url, parsed.text);
        run.record(url, PageOutcome::Indexed);

        if self.config.max_depth.is_some_and(|max| task.depth >= max) {
            tracing::debug!("Not following links of {}: depth limit reached", url);
            return;
        }

        let mut children = Vec::new();
        for href in &parsed.links {
            run.statistics.links_found += 1;

            match classify_link(href, &task.base) {
                LinkTarget::InScope(target) => children.push(task.child(target)),
                LinkTarget::OutOfScope(target) => {
                    tracing::trace!("Ignoring out-of-scope link {} on {}", target, url);
                    run.statistics.links_out_of_scope += 1;
                }
                LinkTarget::Malformed => run.statistics.links_malformed += 1,
            }
        }

        run.frontier.push_links(children);
    }
}
