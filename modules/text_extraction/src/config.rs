//! Configuration for the text extraction client

use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Client configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Text extraction client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Service URL the document is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Whole-request timeout on the HTTP client (e.g. "30s"); unrelated to the
    /// `timeout` extraction option, which is enforced by the service
    #[serde(default, with = "humantime_serde")]
    pub request_timeout: Option<Duration>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Parsed endpoint; only http and https are accepted
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.endpoint).map_err(|e| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        }
    }
}

fn default_endpoint() -> String {
    "http://localhost:8080/extract".to_string()
}

fn default_user_agent() -> String {
    format!("text-extraction/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoint, "http://localhost:8080/extract");
        assert!(config.request_timeout.is_none());
        assert!(config.user_agent.starts_with("text-extraction/"));
        assert!(config.endpoint_url().is_ok());
    }

    #[test]
    fn test_from_yaml() {
        let config = Config::from_yaml_str(
            "endpoint: https://extract.example.com/v1/text\nrequest_timeout: 45s\n",
        )
        .unwrap();
        assert_eq!(config.endpoint, "https://extract.example.com/v1/text");
        assert_eq!(config.request_timeout, Some(Duration::from_secs(45)));
        assert!(config.user_agent.starts_with("text-extraction/"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_yaml_str("endpont: http://x\n").is_err());
    }

    #[test]
    fn test_endpoint_validation() {
        assert!(matches!(
            Config::new("not a url").endpoint_url(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            Config::new("ftp://files.example.com/extract").endpoint_url(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }
}
