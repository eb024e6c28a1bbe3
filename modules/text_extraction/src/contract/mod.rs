//! Contract layer - public API shared by every construction style
//!
//! This layer contains transport-agnostic models, errors and the client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::TextExtractionApi;
pub use error::{ExtractionError, TransportError, ValidationError};
pub use model::{
    CanonicalHeaderSet, CanonicalSettings, Document, ExtractionRequestConfig, HeaderValue,
    OcrOptions, OptionKey, OptionValue, PreparedRequest, RotateAngle, Timeout,
};
