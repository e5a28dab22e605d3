pub mod clients;
pub mod config;
pub mod error;
pub mod export;
pub mod parsers;
pub mod pipeline;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::FinderConfig;
pub use error::{FinderError, Result};
pub use results::{CompanyRecord, NO_DATA, RegistryDetails, SearchPage};

use clients::{HttpClient, RegistryClient, SearchClient};
use parsers::{PatternFinder, ResultExtractor};
use pipeline::EnrichOptions;

/// Main builder for a discovery run: search, dedupe, enrich, export
pub struct Finder {
    config: FinderConfig,
}

impl Finder {
    /// Create a new Finder with the given configuration
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Set the search query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.config.query = query.into();
        self
    }

    /// Set the maximum number of records
    pub fn with_max_companies(mut self, max_companies: usize) -> Self {
        self.config.max_companies = max_companies;
        self
    }

    /// Set the pause between candidates
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.config.delay_ms = delay_ms;
        self
    }

    /// Set where the CSV table is written
    pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Searches for companies and enriches them, without writing anything.
    ///
    /// Only the initial search can fail; per-company lookups degrade to "No data".
    pub async fn discover(&self) -> Result<Vec<CompanyRecord>> {
        let (search, registry) = self.clients()?;

        ::log::info!("Searching for companies: {}", self.config.query);
        let page = search
            .search(&self.config.query, self.config.num_results)
            .await?;
        ::log::debug!("Outbound links: {:?}", page.links);

        let candidates = utils::dedupe_preserving_order(page.names);
        ::log::info!("Found unique company names: {:?}", candidates);

        let options = EnrichOptions {
            max_records: self.config.max_companies,
            delay: self.config.delay(),
            nip_search_fallback: self.config.nip_search_fallback,
        };
        Ok(pipeline::enrich_candidates(&search, &registry, &candidates, options).await)
    }

    /// Full run: discover, write the CSV, print the table
    pub async fn run(&self) -> Result<Vec<CompanyRecord>> {
        let records = self.discover().await?;

        export::export_csv(&records, &self.config.output_path)?;
        ::log::info!("Data saved to {}", self.config.output_path);
        println!("{}", export::render_table(&records));

        Ok(records)
    }

    fn clients(&self) -> Result<(SearchClient, RegistryClient)> {
        let http = HttpClient::new(self.config.timeout(), &self.config.user_agent)?;
        let extractor =
            ResultExtractor::new(&self.config.title_selector, &self.config.redirect_marker)?;
        let patterns = PatternFinder::new()?;

        let search = SearchClient::new(http.clone(), &self.config.search_url, extractor, patterns);
        let registry = RegistryClient::new(http, &self.config.registry_url);
        Ok((search, registry))
    }
}
