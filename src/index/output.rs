use crate::index::SearchResult;
use std::io::{self, Write};

/// Writes search results for a person to read
///
/// Prints a `Search results:` header and one `- <url>` line per match, or
/// `No results found.` when nothing matched.
pub fn print_results(results: &SearchResult, out: &mut impl Write) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "No results found.");
    }

    writeln!(out, "Search results:")?;
    for url in results.iter() {
        writeln!(out, "- {}", url)?;
    }
    Ok(())
}
