use crate::error::Result;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use url::Url;

/// GET helpers over a shared reqwest client.
///
/// Every call is bounded by the client timeout and fails on non-2xx status.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    /// Fetches a page as text, presenting the configured browser User-Agent
    pub async fn get_page(&self, url: &str) -> Result<String> {
        ::log::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    /// Fetches and decodes a JSON document
    pub async fn get_json(&self, url: Url) -> Result<serde_json::Value> {
        ::log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;

        Ok(response.json::<serde_json::Value>().await?)
    }
}
