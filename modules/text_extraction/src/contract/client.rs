//! Client trait for callers that need text back from the extraction service

use super::{
    error::ExtractionError,
    model::{Document, ExtractionRequestConfig, PreparedRequest},
};
use async_trait::async_trait;

/// Text extraction API
#[async_trait]
pub trait TextExtractionApi: Send + Sync {
    /// Normalize `config` and send `document` with the resulting headers
    async fn get_text(
        &self,
        document: Document,
        config: &ExtractionRequestConfig,
    ) -> Result<String, ExtractionError>;

    /// Send a request that was already normalized
    async fn send_prepared(&self, request: PreparedRequest) -> Result<String, ExtractionError>;
}
