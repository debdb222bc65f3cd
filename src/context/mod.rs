//! Page context collection.
//!
//! Extracts a small, fixed set of signals from the page hosting the widget
//! (title, meta description, URL, main content, navigation links) and
//! serializes them into the string embedded in every prompt.
//!
//! The collector only reads the [`PageDocument`] it is handed, so it can be
//! driven by synthetic documents in tests.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Main content is cut to this many characters, with no marker appended.
pub const MAX_MAIN_CONTENT_CHARS: usize = 1000;

/// A parsed HTML page plus the URL it was loaded from.
pub struct PageDocument {
    html: Html,
    url: Option<String>,
}

impl PageDocument {
    /// Parse a full HTML document.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
            url: None,
        }
    }

    /// Attach the address the page was served from.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn html(&self) -> &Html {
        &self.html
    }
}

impl std::fmt::Debug for PageDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDocument")
            .field("url", &self.url)
            .field("html", &"..")
            .finish()
    }
}

/// One anchor found inside a `<nav>` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationLink {
    pub text: String,
    pub href: String,
}

/// Snapshot of the hosting page used to ground model replies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub title: String,
    pub description: String,
    pub url: String,
    #[serde(rename = "mainContent")]
    pub main_content: String,
    #[serde(rename = "navigation")]
    pub navigation_links: Vec<NavigationLink>,
}

impl PageContext {
    /// Collect a snapshot from `document`. Every field independently falls
    /// back to empty when the page lacks it.
    pub fn collect(document: &PageDocument) -> Self {
        let html = document.html();
        let context = Self {
            title: title(html),
            description: meta_description(html),
            url: document.url().unwrap_or_default().to_string(),
            main_content: main_content(html),
            navigation_links: navigation_links(html),
        };
        debug!(
            title = %context.title,
            main_content_chars = context.main_content.chars().count(),
            navigation_links = context.navigation_links.len(),
            "collected page context"
        );
        context
    }

    /// Serialize to the JSON text embedded in prompts. Field order is fixed.
    pub fn to_context_string(&self) -> String {
        // Only strings and vectors of strings; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Collect and serialize in one step.
pub fn collect_context_string(document: &PageDocument) -> String {
    PageContext::collect(document).to_context_string()
}

fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

fn first<'a>(html: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let sel = selector(css)?;
    html.select(&sel).next()
}

fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn title(html: &Html) -> String {
    first(html, "title").map(text_content).unwrap_or_default()
}

fn meta_description(html: &Html) -> String {
    first(html, r#"meta[name="description"]"#)
        .and_then(|meta| meta.value().attr("content"))
        .unwrap_or_default()
        .to_string()
}

/// `<main>` wins when it has text; an empty `<main>` falls through to `<article>`.
fn main_content(html: &Html) -> String {
    let text = ["main", "article"]
        .iter()
        .filter_map(|css| first(html, css).map(text_content))
        .find(|text| !text.is_empty())
        .unwrap_or_default();
    truncate_chars(text, MAX_MAIN_CONTENT_CHARS)
}

fn navigation_links(html: &Html) -> Vec<NavigationLink> {
    let Some(sel) = selector("nav a") else {
        return Vec::new();
    };
    html.select(&sel)
        .map(|link| NavigationLink {
            text: text_content(link).trim().to_string(),
            href: link.value().attr("href").unwrap_or_default().to_string(),
        })
        .collect()
}

fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => text[..end].to_string(),
        None => text,
    }
}
