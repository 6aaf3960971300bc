//! People listing data source.
//!
//! A single GET fetches one batch:
//! `{base_url}?results={count}&inc={field,field,...}`, answered with
//! `{ "results": [ ...people... ] }`. Any transport error, non-success status
//! or undecodable body is reported as [`RosterError::Fetch`]. There are no
//! retries and no request timeout.

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::error::{Result, RosterError};
use crate::person::Person;
use crate::types::Field;

/// Common interface for people sources
pub trait PersonSource: Send + Sync {
    /// Fetch one batch of `count` people including only `fields`.
    fn fetch_batch(
        &self,
        count: u32,
        fields: &[Field],
    ) -> impl std::future::Future<Output = Result<Vec<Person>>> + Send;
}

#[derive(Debug, Deserialize)]
struct BatchResponse {
    results: Vec<Person>,
}

/// Source backed by a randomuser.me-compatible HTTP endpoint.
#[derive(Debug, Clone)]
pub struct RandomUserSource {
    client: Client,
    base_url: Url,
}

impl RandomUserSource {
    /// Create a source for `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RosterError::InvalidUrl(base_url.to_string(), e.to_string()))?;
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.base_url)
    }

    /// Build the request URL for a batch.
    pub fn batch_url(&self, count: u32, fields: &[Field]) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("results", &count.to_string())
            .append_pair("inc", &Field::join(fields));
        url
    }
}

impl PersonSource for RandomUserSource {
    async fn fetch_batch(&self, count: u32, fields: &[Field]) -> Result<Vec<Person>> {
        let url = self.batch_url(count, fields);
        tracing::debug!(%url, "fetching people");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RosterError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "people listing returned an error status");
            return Err(RosterError::Fetch(format!("HTTP {}", status)));
        }

        let batch: BatchResponse = response
            .json()
            .await
            .map_err(|e| RosterError::Fetch(format!("invalid response body: {}", e)))?;

        tracing::debug!(count = batch.results.len(), "fetched people");
        Ok(batch.results)
    }
}

/// Fetch the configured batch from `source`.
pub async fn fetch_configured<S: PersonSource>(source: &S, config: &Config) -> Result<Vec<Person>> {
    source.fetch_batch(config.results, &config.fields).await
}
