use url::Url;

/// Returns the network location (`host[:port]`) of a URL
///
/// The host is already lowercased by URL parsing for `http`/`https`, and the
/// scheme's default port is elided, so `https://EXAMPLE.com:443/` and
/// `https://example.com/` share a network location.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_indexer::url::network_location;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(network_location(&url), "example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(network_location(&url), "127.0.0.1:8080");
/// ```
pub fn network_location(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Returns true if `url` shares its network location with `base`
///
/// Scheme and path are ignored; subdomains are distinct locations.
pub fn in_scope(url: &Url, base: &Url) -> bool {
    network_location(url) == network_location(base)
}
