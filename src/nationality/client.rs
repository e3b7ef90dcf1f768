//! HTTP client for the nationality-prediction service.
//!
//! # Responsibilities
//! - Construct `<base>/?name=<escaped>` query URLs
//! - Enforce a per-request deadline so a hung upstream cannot stall a
//!   connection's read loop
//! - Treat non-success statuses and undecodable bodies as errors

use std::time::Duration;

use tokio::time::timeout;
use url::Url;

use crate::config::schema::NationalityConfig;
use crate::nationality::types::{NameLookupResult, NationalityError};

/// Shared upstream client; cheap to clone, one per process.
#[derive(Debug, Clone)]
pub struct NationalityClient {
    client: reqwest::Client,
    base_url: Url,
    deadline: Duration,
}

impl NationalityClient {
    /// Build a client from configuration.
    pub fn new(config: &NationalityConfig) -> Result<Self, NationalityError> {
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            deadline: Duration::from_secs(config.request_timeout_secs),
        })
    }

    /// Query the upstream for predictions on `name`.
    ///
    /// The whole exchange (connect, send, read body) runs under one
    /// deadline; elapsing it yields `NationalityError::Timeout`.
    pub async fn lookup(&self, name: &str) -> Result<NameLookupResult, NationalityError> {
        let url = self.lookup_url(name);
        tracing::debug!(url = %url, "Querying nationality upstream");

        match timeout(self.deadline, self.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(NationalityError::Timeout(self.deadline.as_secs())),
        }
    }

    async fn fetch(&self, url: Url) -> Result<NameLookupResult, NationalityError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NationalityError::UpstreamStatus(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// The query URL for `name`, with proper escaping.
    fn lookup_url(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().clear().append_pair("name", name);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> NationalityClient {
        NationalityClient::new(&NationalityConfig::default()).unwrap()
    }

    #[test]
    fn test_lookup_url_appends_name_query() {
        let url = client().lookup_url("michael");
        assert_eq!(url.as_str(), "https://api.nationalize.io/?name=michael");
    }

    #[test]
    fn test_lookup_url_escapes_reserved_characters() {
        let url = client().lookup_url("mary jane&co");
        assert_eq!(
            url.as_str(),
            "https://api.nationalize.io/?name=mary+jane%26co"
        );
    }

    #[test]
    fn test_empty_name_is_still_a_valid_query() {
        let url = client().lookup_url("");
        assert_eq!(url.as_str(), "https://api.nationalize.io/?name=");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = NationalityConfig {
            base_url: "::not a url::".to_string(),
            request_timeout_secs: 10,
        };
        assert!(matches!(
            NationalityClient::new(&config),
            Err(NationalityError::InvalidUrl(_))
        ));
    }
}
