use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Configuration for a company discovery run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinderConfig {
    /// Search query used to discover company names
    #[serde(default = "default_query")]
    pub query: String,

    /// Number of results requested from the search engine
    #[serde(default = "default_num_results")]
    pub num_results: usize,

    /// Maximum number of records produced
    #[serde(default = "default_max_companies")]
    pub max_companies: usize,

    /// Pause between candidates, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Where the CSV table is written
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Search engine endpoint (query string is appended)
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Base URL of the KRS registry API
    #[serde(default = "default_registry_url")]
    pub registry_url: String,

    /// User-Agent header sent to the search engine
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// CSS selector for result titles on the search page
    #[serde(default = "default_title_selector")]
    pub title_selector: String,

    /// Substring marking redirect-wrapped result links
    #[serde(default = "default_redirect_marker")]
    pub redirect_marker: String,

    /// Search for a NIP directly when the registry does not provide one
    #[serde(default)]
    pub nip_search_fallback: bool,
}

impl FinderConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            query: default_query(),
            num_results: default_num_results(),
            max_companies: default_max_companies(),
            delay_ms: default_delay_ms(),
            timeout_secs: default_timeout_secs(),
            output_path: default_output_path(),
            search_url: default_search_url(),
            registry_url: default_registry_url(),
            user_agent: default_user_agent(),
            title_selector: default_title_selector(),
            redirect_marker: default_redirect_marker(),
            nip_search_fallback: false,
        }
    }
}

fn default_query() -> String {
    "producent karmy dla psów i kotów".to_string()
}

fn default_num_results() -> usize {
    20
}

fn default_max_companies() -> usize {
    10
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_output_path() -> String {
    "companies.csv".to_string()
}

fn default_search_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_registry_url() -> String {
    "https://api-krs.ms.gov.pl".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/117.0.0.0 Safari/537.36".to_string()
}

fn default_title_selector() -> String {
    "span.VuuXrf".to_string()
}

fn default_redirect_marker() -> String {
    "/url?q=".to_string()
}
