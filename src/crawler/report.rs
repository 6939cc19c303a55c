//! Crawl report and statistics
//!
//! A finished crawl hands back everything it built: the index, the visited
//! set, the outcome of every visited URL and a statistics summary.

use crate::crawler::outcome::PageOutcome;
use crate::crawler::visited::VisitedSet;
use crate::index::{Index, SearchResult};
use crate::url::lookup_key;
use chrono::{DateTime, Utc};
use std::io::{self, Write};
use std::time::Duration;

/// Counters collected during a crawl run
#[derive(Debug, Clone)]
pub struct CrawlStatistics {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// URLs dispatched to the fetcher
    pub pages_visited: usize,

    /// Pages added to the index
    pub pages_indexed: usize,

    /// Pages skipped because their content was not HTML
    pub pages_skipped: usize,

    /// Pages whose fetch failed
    pub fetch_failures: usize,

    /// Raw hrefs seen on indexed pages
    pub links_found: usize,

    /// Links pointing at another network location
    pub links_out_of_scope: usize,

    /// Links that could not be resolved and were dropped
    pub links_malformed: usize,

    /// Pending tasks discarded when the page budget ran out
    pub tasks_discarded: usize,

    /// True if `max-pages` stopped the crawl before the frontier emptied
    pub budget_exhausted: bool,
}

impl CrawlStatistics {
    /// Fresh counters stamped with the current time
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            duration: Duration::ZERO,
            pages_visited: 0,
            pages_indexed: 0,
            pages_skipped: 0,
            fetch_failures: 0,
            links_found: 0,
            links_out_of_scope: 0,
            links_malformed: 0,
            tasks_discarded: 0,
            budget_exhausted: false,
        }
    }

    /// Counts one outcome
    pub(crate) fn record(&mut self, outcome: &PageOutcome) {
        match outcome {
            PageOutcome::Indexed => self.pages_indexed += 1,
            PageOutcome::SkippedNonHtml { .. } => self.pages_skipped += 1,
            PageOutcome::FetchFailed { .. } => self.fetch_failures += 1,
        }
    }
}

/// Everything a crawl run produced
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// URL to text for every page fetched as HTML
    pub index: Index,

    /// Every URL dispatched to the fetcher
    pub visited: VisitedSet,

    /// Outcome per visited URL, in visiting order
    pub outcomes: Vec<(String, PageOutcome)>,

    /// Summary counters
    pub statistics: CrawlStatistics,
}

impl CrawlReport {
    /// Searches the index built by this run
    pub fn search(&self, keyword: &str) -> SearchResult {
        self.index.search(keyword)
    }

    /// Looks up what happened to a visited URL
    pub fn outcome(&self, url: &str) -> Option<&PageOutcome> {
        let key = lookup_key(url);
        self.outcomes
            .iter()
            .find(|(visited, _)| *visited == key)
            .map(|(_, outcome)| outcome)
    }

    /// Outcomes that were fetch failures
    pub fn failures(&self) -> impl Iterator<Item = (&str, &PageOutcome)> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_error())
            .map(|(url, outcome)| (url.as_str(), outcome))
    }
}

/// Writes statistics in a human-readable form
pub fn print_statistics(stats: &CrawlStatistics, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "=== Crawl Statistics ===\n")?;

    writeln!(out, "Overview:")?;
    writeln!(
        out,
        "  Started: {}",
        stats.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out, "  Duration: {:.2}s", stats.duration.as_secs_f64())?;
    writeln!(out, "  Pages visited: {}", stats.pages_visited)?;
    writeln!(out)?;

    writeln!(out, "Pages by Outcome:")?;
    for (label, count) in [
        ("Indexed", stats.pages_indexed),
        ("Skipped (non-HTML)", stats.pages_skipped),
        ("Fetch failed", stats.fetch_failures),
    ] {
        let percentage = if stats.pages_visited > 0 {
            (count as f64 / stats.pages_visited as f64) * 100.0
        } else {
            0.0
        };
        writeln!(out, "  {}: {} ({:.1}%)", label, count, percentage)?;
    }
    writeln!(out)?;

    writeln!(out, "Links:")?;
    writeln!(out, "  Found: {}", stats.links_found)?;
    writeln!(out, "  Out of scope: {}", stats.links_out_of_scope)?;
    writeln!(out, "  Malformed: {}", stats.links_malformed)?;

    if stats.budget_exhausted {
        writeln!(out)?;
        writeln!(
            out,
            "Page budget exhausted: {} pending URLs not crawled",
            stats.tasks_discarded
        )?;
    }

    Ok(())
}
