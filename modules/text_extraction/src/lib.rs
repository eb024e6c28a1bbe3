//! Text Extraction Module
//!
//! Turns text-extraction preferences into the canonical header set sent with a
//! document to the extraction service, and sends it.
//!
//! Four construction styles fill the same [`ExtractionRequestConfig`]:
//! named parameters ([`GetTextParams`]), a declarative document
//! ([`ExtractionConfigDto`]), functional options ([`api::functional`]) and a
//! fluent builder ([`ExtractionRequestBuilder`]). All of them are normalized
//! by one pipeline: dependency resolution, default omission, header
//! serialization.

// Public exports
pub mod contract;
pub use contract::{
    client::TextExtractionApi, error::ExtractionError, error::TransportError,
    error::ValidationError, CanonicalHeaderSet, CanonicalSettings, Document,
    ExtractionRequestConfig, HeaderValue, OcrOptions, OptionKey, OptionValue, PreparedRequest,
    RotateAngle, Timeout,
};

pub mod api;
pub use api::{
    DeclarativeError, ExtractOption, ExtractionConfigDto, ExtractionRequestBuilder,
    GetTextParams, TextExtractionClient,
};

pub mod config;
pub use config::{Config, ConfigError};

pub mod domain;
pub use domain::{normalize, Normalized, RecordingTransport, Transport};

// Internal modules (hidden from public API); HTTP is reached through
// `TextExtractionClient::http`
#[doc(hidden)]
pub mod infra;
