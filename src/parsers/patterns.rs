use crate::error::Result;
use crate::parsers::html::{element_texts, parse_selector, stripped_strings};
use crate::utils::normalize_identifier;
use regex::Regex;
use scraper::{Html, Selector};
use std::fmt;
use std::sync::Arc;

/// Registry identifiers that can be looked for on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// National Court Register number, exactly 10 digits
    Krs,
    /// Tax identification number, a 10+ character run of digits, spaces and dashes
    Nip,
}

impl IdentifierKind {
    /// Label used in text and appended to search queries
    pub fn label(&self) -> &'static str {
        match self {
            IdentifierKind::Krs => "KRS",
            IdentifierKind::Nip => "NIP",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One way of finding an identifier in a document
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Returns the normalized identifier, if this strategy finds one
    fn find(&self, doc: &Html) -> Option<String>;
}

impl<S: Strategy + ?Sized> Strategy for Arc<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn find(&self, doc: &Html) -> Option<String> {
        (**self).find(doc)
    }
}

/// Runs strategies in order and returns the first hit
pub fn first_match(strategies: &[Box<dyn Strategy>], doc: &Html) -> Option<String> {
    strategies.iter().find_map(|strategy| {
        let found = strategy.find(doc);
        if let Some(value) = &found {
            ::log::debug!("Strategy '{}' matched {}", strategy.name(), value);
        }
        found
    })
}

/// Scans text nodes for a labeled identifier pattern
pub struct LabeledText {
    name: &'static str,
    regex: Regex,
    /// Only text nodes containing this substring are considered
    required_substring: Option<&'static str>,
}

impl LabeledText {
    pub fn new(
        name: &'static str,
        pattern: &str,
        required_substring: Option<&'static str>,
    ) -> Result<Self> {
        Ok(Self {
            name,
            regex: Regex::new(pattern)?,
            required_substring,
        })
    }

    /// Matches a single text fragment
    pub fn match_fragment(&self, text: &str) -> Option<String> {
        if let Some(required) = self.required_substring {
            if !text.contains(required) {
                return None;
            }
        }
        capture_normalized(&self.regex, text)
    }

    /// First match over a sequence of text fragments
    pub fn match_fragments<'a, I>(&self, fragments: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        fragments
            .into_iter()
            .find_map(|text| self.match_fragment(text))
    }
}

impl Strategy for LabeledText {
    fn name(&self) -> &'static str {
        self.name
    }

    fn find(&self, doc: &Html) -> Option<String> {
        self.match_fragments(stripped_strings(doc))
    }
}

/// Scans `<b>` elements for a bare numeric run
pub struct BoldNumericRun {
    bold_selector: Selector,
    regex: Regex,
}

impl BoldNumericRun {
    pub fn new() -> Result<Self> {
        Ok(Self {
            bold_selector: parse_selector("b")?,
            regex: Regex::new(r"([\d\s\-]{10,})")?,
        })
    }
}

impl Strategy for BoldNumericRun {
    fn name(&self) -> &'static str {
        "bold numeric run"
    }

    fn find(&self, doc: &Html) -> Option<String> {
        element_texts(doc, &self.bold_selector)
            .iter()
            .find_map(|text| capture_normalized(&self.regex, text))
    }
}

/// First capture group with spaces and dashes removed; an all-separator
/// capture counts as no match
fn capture_normalized(regex: &Regex, text: &str) -> Option<String> {
    let captured = regex.captures(text)?.get(1)?;
    let normalized = normalize_identifier(captured.as_str());
    (!normalized.is_empty()).then_some(normalized)
}

/// Ordered strategy lists for each identifier kind
pub struct PatternFinder {
    krs: Vec<Box<dyn Strategy>>,
    nip: Vec<Box<dyn Strategy>>,
    krs_text: Arc<LabeledText>,
    nip_text: Arc<LabeledText>,
}

impl PatternFinder {
    pub fn new() -> Result<Self> {
        let krs_text = Arc::new(krs_text_strategy()?);
        let nip_text = Arc::new(nip_text_strategy()?);

        Ok(Self {
            krs: vec![Box::new(Arc::clone(&krs_text))],
            nip: vec![
                Box::new(Arc::clone(&nip_text)),
                Box::new(BoldNumericRun::new()?),
            ],
            krs_text,
            nip_text,
        })
    }

    pub fn strategies(&self, kind: IdentifierKind) -> &[Box<dyn Strategy>] {
        match kind {
            IdentifierKind::Krs => &self.krs,
            IdentifierKind::Nip => &self.nip,
        }
    }

    pub fn find(&self, kind: IdentifierKind, doc: &Html) -> Option<String> {
        first_match(self.strategies(kind), doc)
    }

    pub fn find_in_html(&self, kind: IdentifierKind, html: &str) -> Option<String> {
        let doc = Html::parse_document(html);
        self.find(kind, &doc)
    }

    /// Looks for a labeled identifier in loose text fragments (no markup)
    pub fn find_in_fragments<'a, I>(&self, kind: IdentifierKind, fragments: I) -> Option<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match kind {
            IdentifierKind::Krs => self.krs_text.match_fragments(fragments),
            IdentifierKind::Nip => self.nip_text.match_fragments(fragments),
        }
    }
}

fn krs_text_strategy() -> Result<LabeledText> {
    LabeledText::new("KRS label", r"KRS[:\s]*(\d{10})", Some("KRS"))
}

fn nip_text_strategy() -> Result<LabeledText> {
    LabeledText::new("NIP label", r"NIP[:\s]*([\d\s\-]{10,})", None)
}
