//! Upstream types and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inbound `/country-name-delegator` message.
///
/// The field is capitalized on the wire (`{"Name": "..."}`); an absent
/// field decodes to the empty string and is passed through unvalidated.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NameRequest {
    #[serde(rename = "Name")]
    pub name: String,
}

/// One country guess from the prediction service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CountryPrediction {
    pub country_id: String,
    pub probability: f64,
}

/// Full prediction response, relayed to the socket client verbatim.
///
/// The `country` list keeps upstream order; no re-sorting is performed.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct NameLookupResult {
    pub count: u64,
    pub name: String,
    pub country: Vec<CountryPrediction>,
}

/// Errors that can occur while querying the prediction service.
#[derive(Debug, Error)]
pub enum NationalityError {
    /// The configured base URL (or the name-substituted query) is invalid.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network or transport failure talking to the upstream.
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream did not answer within the configured deadline.
    #[error("upstream request timed out after {0} seconds")]
    Timeout(u64),

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),

    /// The upstream body was not a valid prediction document.
    #[error("upstream response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
