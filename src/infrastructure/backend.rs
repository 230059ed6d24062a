// HTTP adapter for the Fitness Data Service collaborator
use anyhow::Context;
use async_trait::async_trait;

use crate::application::fitness_service::FitnessDataService;

/// Posts `REQUEST_UPDATE` to the backend collaborator over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFitnessService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFitnessService {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl FitnessDataService for HttpFitnessService {
    async fn request_update(&self) -> anyhow::Result<()> {
        let url = format!("{}/update", self.base_url);
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .context("failed to send update request to fitness backend")?;

        if !response.status().is_success() {
            anyhow::bail!("update request failed with status {}", response.status());
        }

        Ok(())
    }
}
