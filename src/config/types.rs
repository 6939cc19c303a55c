use serde::Deserialize;

/// Default seed URL when none is configured
pub const DEFAULT_SEED_URL: &str = "https://example.com";

/// Default search keyword when none is configured
pub const DEFAULT_KEYWORD: &str = "test";

/// Main configuration structure for Site-Indexer
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Order in which discovered links are explored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Traversal {
    /// Explore a link's whole subtree before its next sibling
    #[default]
    DepthFirst,
    /// Explore pages level by level from the seed
    BreadthFirst,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Maximum number of URLs dispatched to the fetcher (unbounded when absent)
    pub max_pages: Option<usize>,

    /// Maximum link hops from the seed whose links are still followed
    pub max_depth: Option<u32>,

    /// Frontier discipline
    pub traversal: Traversal,

    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,

    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages: None,
            max_depth: None,
            traversal: Traversal::default(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct UserAgentConfig {
    /// Name of the crawler
    pub crawler_name: String,

    /// Version of the crawler
    pub crawler_version: String,

    /// URL with information about the crawler
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "SiteIndexer".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://example.com/about".to_string(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the User-Agent header value: `Name/Version (+ContactURL)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{})",
            self.crawler_name, self.crawler_version, self.contact_url
        )
    }
}

/// Seed and keyword for a crawl-then-search run
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SearchConfig {
    /// URL the crawl starts from; its network location scopes the crawl
    pub seed_url: String,

    /// Keyword searched for once the crawl finishes
    pub keyword: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            seed_url: DEFAULT_SEED_URL.to_string(),
            keyword: DEFAULT_KEYWORD.to_string(),
        }
    }
}
