use crate::clients::HttpClient;
use crate::error::Result;
use crate::parsers::{IdentifierKind, PatternFinder, ResultExtractor};
use crate::results::{NO_DATA, SearchPage};
use crate::utils::build_search_url;
use scraper::Html;

/// Search engine client: result discovery and identifier lookups
pub struct SearchClient {
    http: HttpClient,
    base_url: String,
    extractor: ResultExtractor,
    patterns: PatternFinder,
}

impl SearchClient {
    pub fn new(
        http: HttpClient,
        base_url: &str,
        extractor: ResultExtractor,
        patterns: PatternFinder,
    ) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
            extractor,
            patterns,
        }
    }

    /// Runs a search and extracts result titles and outbound links.
    ///
    /// Transport and status errors are returned to the caller.
    pub async fn search(&self, query: &str, num_results: usize) -> Result<SearchPage> {
        let url = build_search_url(&self.base_url, query, Some(num_results));
        let html = self.http.get_page(&url).await?;
        Ok(self.extractor.extract_html(&html))
    }

    /// Searches for "<company> <label>" and extracts the identifier.
    ///
    /// Failures are logged and reported as `None`.
    pub async fn find_identifier(&self, company: &str, kind: IdentifierKind) -> Option<String> {
        let query = format!("{} {}", company, kind.label());
        let url = build_search_url(&self.base_url, &query, None);

        match self.http.get_page(&url).await {
            Ok(html) => {
                let doc = Html::parse_document(&html);
                let found = self.patterns.find(kind, &doc);
                if found.is_none() {
                    ::log::debug!("No {} found for {}", kind, company);
                }
                found
            }
            Err(e) => {
                ::log::error!("Error fetching {} for company {}: {}", kind, company, e);
                None
            }
        }
    }

    pub async fn find_krs(&self, company: &str) -> Option<String> {
        self.find_identifier(company, IdentifierKind::Krs).await
    }

    /// NIP for the company, or the "No data" sentinel
    pub async fn find_nip(&self, company: &str) -> String {
        self.find_identifier(company, IdentifierKind::Nip)
            .await
            .unwrap_or_else(|| NO_DATA.to_string())
    }
}
