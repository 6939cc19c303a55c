//! URL handling module for Site-Indexer
//!
//! This module turns raw `href` values into absolute crawl targets and decides
//! which of them belong to the crawl. A URL is in scope when its network
//! location (`host[:port]`) equals the seed's.
//!
//! Malformed input never produces an error here: a link that cannot be turned
//! into an absolute `http`/`https` URL resolves to `None` and is dropped.

mod resolve;
mod scope;

pub use resolve::{lookup_key, parse_seed, resolve};
pub use scope::{in_scope, network_location};

/// Classification of a raw link relative to a crawl's base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Resolved and on the base URL's network location
    InScope(::url::Url),
    /// Resolved but on another network location
    OutOfScope(::url::Url),
    /// Could not be resolved to an absolute http(s) URL
    Malformed,
}

/// Resolves `href` against `base` and classifies the result
///
/// # Examples
///
/// ```
/// use site_indexer::url::{classify_link, LinkTarget};
/// use url::Url;
///
/// let base = Url::parse("https://example.com/").unwrap();
/// assert!(matches!(classify_link("/about", &base), LinkTarget::InScope(_)));
/// assert!(matches!(classify_link("https://other.org/", &base), LinkTarget::OutOfScope(_)));
/// assert_eq!(classify_link("htp://example.com", &base), LinkTarget::Malformed);
/// ```
pub fn classify_link(href: &str, base: &::url::Url) -> LinkTarget {
    match resolve(href, base) {
        Some(url) if in_scope(&url, base) => LinkTarget::InScope(url),
        Some(url) => LinkTarget::OutOfScope(url),
        None => LinkTarget::Malformed,
    }
}
