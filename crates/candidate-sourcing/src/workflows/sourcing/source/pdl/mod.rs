mod payload;

use super::{CandidateSource, DataSource, ProviderError};
use crate::config::ProviderConfig;
use crate::workflows::sourcing::domain::Candidate;
use async_trait::async_trait;
use payload::{search_request, SearchResponse};
use reqwest::Client;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Live People Data Labs person search.
pub struct PdlCandidateSource {
    client: Client,
    endpoint: String,
    api_key: String,
    result_size: u16,
}

impl PdlCandidateSource {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(ProviderError::MissingCredential)?;
        let client = Client::builder()
            .user_agent(concat!("candidate-sourcing/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(ProviderError::Client)?;

        Ok(Self {
            client,
            endpoint: config.base_url.clone(),
            api_key,
            result_size: config.result_size,
        })
    }
}

#[async_trait]
impl CandidateSource for PdlCandidateSource {
    fn data_source(&self) -> DataSource {
        DataSource::Live
    }

    async fn fetch(&self, skills: &BTreeSet<String>) -> Result<Vec<Candidate>, ProviderError> {
        let request = search_request(skills, self.result_size);
        debug!(endpoint = %self.endpoint, skills = ?skills, "querying people search provider");

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ProviderError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(ProviderError::Unreachable)?;
        let payload: SearchResponse = serde_json::from_str(&body)
            .map_err(|err| ProviderError::MalformedPayload(err.to_string()))?;
        let candidates = payload.into_candidates();

        info!(count = candidates.len(), "provider returned candidates");
        Ok(candidates)
    }
}
