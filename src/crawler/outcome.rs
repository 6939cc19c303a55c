/// Outcome definitions for visited pages
///
/// Every URL in the visited set ends a crawl in exactly one of these states.
use std::fmt;

/// What happened to a URL once it was dispatched to the fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Fetched as HTML and added to the index
    Indexed,

    /// Fetched, but the Content-Type was not HTML
    SkippedNonHtml {
        /// The Content-Type received, if any
        content_type: Option<String>,
    },

    /// The transport failed (connection, DNS, timeout, body read)
    FetchFailed {
        /// Error description
        error: String,
    },
}

impl PageOutcome {
    /// Returns true if the fetch itself failed
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indexed => write!(f, "indexed"),
            Self::SkippedNonHtml {
                content_type: Some(ct),
            } => write!(f, "skipped non-HTML content ({})", ct),
            Self::SkippedNonHtml { content_type: None } => {
                write!(f, "skipped content without Content-Type")
            }
            Self::FetchFailed { error } => write!(f, "fetch failed: {}", error),
        }
    }
}
