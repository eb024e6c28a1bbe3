//! Native client implementation - wraps the domain service
//!
//! Offers one entry point per construction style; all of them end in the same
//! normalize-and-send path.

use crate::api::declarative::ExtractionConfigDto;
use crate::api::functional::{apply_options, ExtractOption};
use crate::api::params::GetTextParams;
use crate::config::{Config, ConfigError};
use crate::contract::{
    Document, ExtractionError, ExtractionRequestConfig, PreparedRequest, TextExtractionApi,
};
use crate::domain::{Service, Transport};
use crate::infra::http::HttpTransport;
use async_trait::async_trait;
use std::sync::Arc;

/// Client for the text extraction service
#[derive(Clone)]
pub struct TextExtractionClient {
    service: Arc<Service>,
}

impl TextExtractionClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }

    /// Client over any transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::new(Arc::new(Service::new(transport)))
    }

    /// Client over HTTP, configured from `config`
    pub fn http(config: &Config) -> Result<Self, ConfigError> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Named-parameter style
    pub async fn get_text_with_params(
        &self,
        document: Document,
        params: GetTextParams,
    ) -> Result<String, ExtractionError> {
        let config = ExtractionRequestConfig::try_from(params)?;
        self.service.get_text(document, &config).await
    }

    /// Declarative-document style
    pub async fn get_text_with_document(
        &self,
        document: Document,
        dto: ExtractionConfigDto,
    ) -> Result<String, ExtractionError> {
        let config = ExtractionRequestConfig::try_from(dto)?;
        self.service.get_text(document, &config).await
    }

    /// Functional-options style
    pub async fn get_text_with_options<I>(
        &self,
        document: Document,
        options: I,
    ) -> Result<String, ExtractionError>
    where
        I: IntoIterator<Item = ExtractOption> + Send,
    {
        let config = apply_options(options)?;
        self.service.get_text(document, &config).await
    }

    /// Normalize without sending
    pub fn prepare(
        &self,
        document: Document,
        config: &ExtractionRequestConfig,
    ) -> Result<PreparedRequest, ExtractionError> {
        self.service.prepare(document, config)
    }
}

#[async_trait]
impl TextExtractionApi for TextExtractionClient {
    async fn get_text(
        &self,
        document: Document,
        config: &ExtractionRequestConfig,
    ) -> Result<String, ExtractionError> {
        self.service.get_text(document, config).await
    }

    async fn send_prepared(&self, request: PreparedRequest) -> Result<String, ExtractionError> {
        self.service.send(request).await
    }
}
