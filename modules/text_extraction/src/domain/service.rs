//! Domain service - normalization plus a single transport exchange

use super::pipeline::normalize;
use super::transport::Transport;
use crate::contract::{Document, ExtractionError, ExtractionRequestConfig, PreparedRequest};
use std::sync::Arc;

/// Domain service for text extraction requests
pub struct Service {
    transport: Arc<dyn Transport>,
}

impl Service {
    /// Create a new service instance
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Normalize `config` and pair the headers with `document`
    pub fn prepare(
        &self,
        document: Document,
        config: &ExtractionRequestConfig,
    ) -> Result<PreparedRequest, ExtractionError> {
        let normalized = normalize(config)?;
        Ok(PreparedRequest::new(normalized.headers, document))
    }

    /// Send a prepared request once
    pub async fn send(&self, request: PreparedRequest) -> Result<String, ExtractionError> {
        let header_count = request.headers().len();
        let body_len = request.document().len();
        tracing::info!(header_count, body_len, "sending text extraction request");

        match self.transport.send(request).await {
            Ok(text) => {
                tracing::debug!(text_len = text.len(), "text extraction succeeded");
                Ok(text)
            }
            Err(e) => {
                tracing::warn!(error = %e, "text extraction request failed");
                Err(e.into())
            }
        }
    }

    /// Normalize and send in one step
    pub async fn get_text(
        &self,
        document: Document,
        config: &ExtractionRequestConfig,
    ) -> Result<String, ExtractionError> {
        let request = self.prepare(document, config)?;
        self.send(request).await
    }
}
