use crate::url::lookup_key;
use indexmap::IndexSet;
use url::Url;

/// URLs already dispatched to the fetcher during one crawl run
///
/// A URL is inserted before its fetch is attempted, whatever the outcome, so
/// no URL is fetched twice even when pages link to themselves or each other.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    urls: IndexSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as visited; returns false if it already was
    ///
    /// Check and insert happen in one step, so two discoveries of the same URL
    /// can never both win.
    pub fn insert(&mut self, url: &Url) -> bool {
        self.urls.insert(url.as_str().to_string())
    }

    /// Whether `url`, in any form serializing to a visited URL, was visited
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(lookup_key(url).as_str())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Visited URLs in visiting order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}
