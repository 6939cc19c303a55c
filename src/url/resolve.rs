use crate::{UrlError, UrlResult};
use url::Url;

/// Resolves a raw `href` against `base` into an absolute crawl target
///
/// # Resolution Rules
///
/// 1. Surrounding whitespace is trimmed; an empty href is dropped
/// 2. An href that already carries a host is used as-is
/// 3. Anything else is joined against `base` (RFC 3986 reference resolution)
/// 4. The result must be `http` or `https` with a host, otherwise it is dropped
///    (`mailto:`, `javascript:`, misspelt schemes such as `htp://`)
/// 5. The fragment is removed, so `page#top` and `page` are one target
///
/// # Returns
///
/// * `Some(Url)` - The absolute URL to consider for crawling
/// * `None` - The href is unusable and should be silently dropped
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_indexer::url::resolve;
///
/// let base = Url::parse("https://example.com/docs/").unwrap();
/// assert_eq!(resolve("intro", &base).unwrap().as_str(), "https://example.com/docs/intro");
/// assert_eq!(resolve("/about", &base).unwrap().as_str(), "https://example.com/about");
/// assert!(resolve("mailto:someone@example.com", &base).is_none());
/// ```
pub fn resolve(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let mut url = match Url::parse(href) {
        Ok(absolute) if absolute.host_str().is_some_and(|h| !h.is_empty()) => absolute,
        _ => base.join(href).ok()?,
    };

    if !is_crawlable(&url) {
        tracing::trace!("Dropping unusable link {}", href);
        return None;
    }

    url.set_fragment(None);
    Some(url)
}

/// Parses the seed URL of a crawl
///
/// Unlike [`resolve`], a bad seed is reported: it is the only URL a caller
/// supplies directly.
pub fn parse_seed(seed: &str) -> UrlResult<Url> {
    let mut url = Url::parse(seed.trim())?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost(seed.to_string()));
    }

    url.set_fragment(None);
    Ok(url)
}

/// Serialized form a crawled URL is stored under
///
/// Anything `url::Url` parses is re-serialized without its fragment, so
/// `https://example.com`, `https://EXAMPLE.com/` and `https://example.com/#top`
/// share one key. Unparseable input is used verbatim.
pub fn lookup_key(url: &str) -> String {
    match Url::parse(url.trim()) {
        Ok(mut parsed) => {
            parsed.set_fragment(None);
            parsed.into()
        }
        Err(_) => url.to_string(),
    }
}

fn is_crawlable(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
}
