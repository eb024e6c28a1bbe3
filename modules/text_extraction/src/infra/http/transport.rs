//! HTTP transport on top of reqwest

use crate::config::{Config, ConfigError};
use crate::contract::{PreparedRequest, TransportError};
use crate::domain::Transport;
use async_trait::async_trait;
use url::Url;

/// POSTs the document to the configured endpoint with the canonical headers
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let endpoint = config.endpoint_url()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        tracing::debug!(endpoint = %endpoint, "text extraction HTTP transport ready");
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: PreparedRequest) -> Result<String, TransportError> {
        let (headers, document) = request.into_parts();
        let header_map = headers.to_header_map()?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .headers(header_map)
            .body(document.into_bytes())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
