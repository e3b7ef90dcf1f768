//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones: addresses must parse,
//! the upstream URL must be absolute http(s), timeouts must be non-zero.
//! Validation is a pure function and reports every problem it finds, not
//! just the first.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Bind address is not a parseable socket address.
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    /// Upstream base URL is not an absolute URL.
    #[error("invalid nationality base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Upstream base URL uses a scheme other than http/https.
    #[error("nationality base URL '{0}' must use http or https")]
    UnsupportedScheme(String),

    /// Upstream request timeout of zero would disable the deadline.
    #[error("nationality request timeout must be greater than zero")]
    ZeroRequestTimeout,

    /// Log level is not one of the tracing levels.
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Validate a configuration, collecting all errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.nationality.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::UnsupportedScheme(
                    config.nationality.base_url.clone(),
                ));
            }
        }
        Err(e) => {
            errors.push(ValidationError::InvalidBaseUrl {
                url: config.nationality.base_url.clone(),
                reason: e.to_string(),
            });
        }
    }

    if config.nationality.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GatewayConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.nationality.base_url = "::garbage::".to_string();
        config.nationality.request_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = GatewayConfig::default();
        config.nationality.base_url = "ftp://api.nationalize.io".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("http or https"));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut config = GatewayConfig::default();
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}
