use log::debug;
use reqwest::Client;

use crate::config::ScraperConfig;
use crate::error::ImportError;

/// Downloads recipe pages over HTTP
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, ImportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the body of `url`; non-success statuses are errors
    pub async fn fetch(&self, url: &str) -> Result<String, ImportError> {
        debug!("Fetching {url}");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
