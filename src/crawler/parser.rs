//! HTML parser for extracting text and links
//!
//! This module handles parsing HTML content to extract:
//! - The page's plain text, which becomes its index entry
//! - The raw `href` values of its `<a>` elements, in document order

use scraper::{Html, Selector};

/// Elements whose text is not page content
const NON_CONTENT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Concatenated text of the document
    pub text: String,

    /// Raw `href` attribute values, unresolved, duplicates preserved
    pub links: Vec<String>,
}

/// Turns HTML into text and outgoing links
pub trait PageParser: Send + Sync {
    /// Parses `html`, which may be empty or malformed
    fn parse(&self, html: &str) -> ParsedPage;
}

/// [`PageParser`] built on `scraper`'s html5ever parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl PageParser for HtmlParser {
    fn parse(&self, html: &str) -> ParsedPage {
        parse_html(html)
    }
}

/// Parses HTML content and extracts text and links
///
/// html5ever recovers from any input, so parsing cannot fail. Text inside
/// `<script>`, `<style>`, `<noscript>` and `<template>` is not included.
///
/// # Example
///
/// ```
/// use site_indexer::crawler::parse_html;
///
/// let html = r#"<html><body><h1>Hi</h1><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.text, "HiLink");
/// assert_eq!(parsed.links, vec!["/page".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        text: extract_text(&document),
        links: extract_links(&document),
    }
}

/// Collects every visible text node of the document
fn extract_text(document: &Html) -> String {
    let mut text = String::new();

    for node in document.root_element().descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| NON_CONTENT_ELEMENTS.contains(&element.name()))
        });

        if !hidden {
            text.push_str(fragment);
        }
    }

    text
}

/// Extracts the raw href of every `<a>` element
fn extract_links(document: &Html) -> Vec<String> {
    let Ok(a_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    document
        .select(&a_selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}
