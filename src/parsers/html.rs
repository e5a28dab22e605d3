use crate::error::{FinderError, Result};
use crate::results::SearchPage;
use scraper::{ElementRef, Html, Selector};

/// Pulls result titles and unwrapped outbound links out of a search results page
#[derive(Debug)]
pub struct ResultExtractor {
    title_selector: Selector,
    link_selector: Selector,
    redirect_marker: String,
}

impl ResultExtractor {
    pub fn new(title_selector: &str, redirect_marker: &str) -> Result<Self> {
        Ok(Self {
            title_selector: parse_selector(title_selector)?,
            link_selector: parse_selector("a[href]")?,
            redirect_marker: redirect_marker.to_string(),
        })
    }

    /// Parses raw HTML and extracts both lists
    pub fn extract_html(&self, html: &str) -> SearchPage {
        let doc = Html::parse_document(html);
        self.extract(&doc)
    }

    pub fn extract(&self, doc: &Html) -> SearchPage {
        let page = SearchPage {
            names: self.titles(doc),
            links: self.outbound_links(doc),
        };

        ::log::debug!(
            "Result extractor found {} titles and {} outbound links",
            page.names.len(),
            page.links.len()
        );
        page
    }

    /// Text of every element matching the title selector, in document order
    pub fn titles(&self, doc: &Html) -> Vec<String> {
        doc.select(&self.title_selector)
            .map(stripped_text)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Targets of redirect-wrapped anchors, with the wrapper prefix and
    /// trailing parameters removed
    pub fn outbound_links(&self, doc: &Html) -> Vec<String> {
        doc.select(&self.link_selector)
            .filter_map(|a| a.value().attr("href"))
            .filter_map(|href| unwrap_redirect(href, &self.redirect_marker))
            .collect()
    }
}

/// Returns the URL wrapped in a redirect link, or `None` if the marker is absent
pub fn unwrap_redirect(href: &str, marker: &str) -> Option<String> {
    if marker.is_empty() || !href.contains(marker) {
        return None;
    }
    let wrapped = href.split(marker).nth(1)?;
    wrapped.split('&').next().map(|s| s.to_string())
}

/// Every non-empty text node of the document, trimmed, in document order.
///
/// Script and style bodies are skipped; `<noscript>` text is kept.
pub fn stripped_strings(doc: &Html) -> impl Iterator<Item = &str> {
    doc.root_element().descendants().filter_map(|node| {
        let text = node.value().as_text()?;
        let in_code = node
            .parent()
            .and_then(|parent| parent.value().as_element().map(|e| e.name()))
            .is_some_and(|name| matches!(name, "script" | "style"));
        if in_code {
            return None;
        }

        let trimmed = text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    })
}

/// Full text of each element matched by `selector` (`<b>` for bold runs)
pub fn element_texts(doc: &Html, selector: &Selector) -> Vec<String> {
    doc.select(selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}

/// Concatenates the trimmed text nodes of an element
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| FinderError::Selector(format!("{}: {:?}", selector, e)))
}
