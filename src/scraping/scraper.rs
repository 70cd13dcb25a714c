use anyhow::{Context, Result};
use tracing::{debug, info};
use url::Url;

use crate::models::offices::OfficeRecord;

/// Pulls the field office list from the appointment scheduler.
pub struct UscisScraper {
    client: reqwest::Client,
    url: Url,
}

impl UscisScraper {
    pub fn new(url: Url) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(UscisScraper { client, url })
    }

    pub async fn fetch_offices(&self) -> Result<Vec<OfficeRecord>> {
        info!("fetching field offices from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("request to {} failed", self.url))?;

        debug!("got response status {}", response.status());
        let response = response
            .error_for_status()
            .context("scheduler returned an error status")?;

        let offices: Vec<OfficeRecord> = response
            .json()
            .await
            .context("failed to decode field office list")?;

        info!("received {} field offices", offices.len());
        Ok(offices)
    }
}
