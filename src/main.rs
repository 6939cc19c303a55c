//! Site-Indexer main entry point
//!
//! Crawls a site, then runs one keyword search over what it found. With no
//! arguments it crawls `https://example.com` and searches for `test`.

use anyhow::Context;
use clap::Parser;
use site_indexer::config::{load_config_with_hash, Config};
use site_indexer::crawler::{print_statistics, Crawler};
use site_indexer::print_results;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Indexer: crawl one site and search its text
///
/// Follows every link that stays on the seed URL's host and port, indexes
/// the text of each HTML page, then prints the pages containing the keyword.
#[derive(Parser, Debug)]
#[command(name = "site-indexer")]
#[command(version)]
#[command(about = "Crawl one site and search its text", long_about = None)]
struct Cli {
    /// URL to start crawling from (overrides the config file)
    #[arg(value_name = "SEED_URL")]
    seed: Option<String>,

    /// Keyword to search for once the crawl finishes (overrides the config file)
    #[arg(value_name = "KEYWORD")]
    keyword: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print crawl statistics after the search results
    #[arg(long)]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(seed) = cli.seed {
        config.search.seed_url = seed;
    }
    if let Some(keyword) = cli.keyword {
        config.search.keyword = keyword;
    }

    let crawler = Crawler::from_config(&config).context("failed to build HTTP client")?;
    let report = crawler
        .crawl(&config.search.seed_url)
        .await
        .with_context(|| format!("cannot crawl {}", config.search.seed_url))?;

    let stats = &report.statistics;
    tracing::info!(
        "Visited {} pages: {} indexed, {} skipped, {} failed",
        stats.pages_visited,
        stats.pages_indexed,
        stats.pages_skipped,
        stats.fetch_failures
    );

    tracing::info!("Searching for {:?}", config.search.keyword);
    let results = report.search(&config.search.keyword);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_results(&results, &mut out)?;
    if cli.stats {
        writeln!(out)?;
        print_statistics(stats, &mut out)?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the search results.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_indexer=info,warn"),
            1 => EnvFilter::new("site_indexer=debug,info"),
            2 => EnvFilter::new("site_indexer=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
