//! Full-text index and keyword search
//!
//! The index maps each crawled URL to the plain text of its page, in the
//! order pages were indexed. Search is a case-insensitive substring match;
//! there is no ranking, so results follow index order.

mod output;

pub use output::print_results;

use crate::url::lookup_key;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Text of one indexed page
#[derive(Debug, Clone)]
struct IndexEntry {
    text: String,
    /// Lowercased copy of `text`, matched against lowercased keywords
    folded: String,
}

/// Insertion-ordered mapping from URL to page text
///
/// Entries are written once and never replaced. Lookups accept a URL in any
/// form that serializes to the stored key, so `https://example.com` finds the
/// page stored as `https://example.com/`.
#[derive(Debug, Clone, Default)]
pub struct Index {
    entries: IndexMap<String, IndexEntry>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page; returns false (leaving the index unchanged) if `url` is
    /// already indexed
    pub fn insert(&mut self, url: &str, text: String) -> bool {
        match self.entries.entry(lookup_key(url)) {
            Entry::Occupied(_) => {
                tracing::debug!("{} is already indexed, keeping the first entry", url);
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(IndexEntry {
                    folded: text.to_lowercase(),
                    text,
                });
                true
            }
        }
    }

    /// Text indexed for `url`
    pub fn get(&self, url: &str) -> Option<&str> {
        self.entries
            .get(lookup_key(url).as_str())
            .map(|entry| entry.text.as_str())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(lookup_key(url).as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(url, text)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(url, entry)| (url.as_str(), entry.text.as_str()))
    }

    /// Indexed URLs in index order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Finds every page whose text contains `keyword`, ignoring case
    ///
    /// A page matches once however often the keyword occurs. The empty
    /// keyword matches every page.
    ///
    /// # Example
    ///
    /// ```
    /// use site_indexer::Index;
    ///
    /// let mut index = Index::new();
    /// index.insert("https://example.com/", "Rust Crawler".to_string());
    /// index.insert("https://example.com/about", "About us".to_string());
    ///
    /// let results = index.search("crawler");
    /// assert_eq!(results.urls(), ["https://example.com/"]);
    /// ```
    pub fn search(&self, keyword: &str) -> SearchResult {
        let keyword = keyword.to_lowercase();
        let urls = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.folded.contains(&keyword))
            .map(|(url, _)| url.clone())
            .collect();

        SearchResult { urls }
    }
}

/// URLs matching a keyword, in index order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    urls: Vec<String>,
}

impl SearchResult {
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for SearchResult {
    fn from(urls: Vec<String>) -> Self {
        Self { urls }
    }
}

impl IntoIterator for SearchResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.urls.into_iter()
    }
}
