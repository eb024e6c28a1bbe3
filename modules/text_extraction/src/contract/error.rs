//! Contract error types for text extraction
//!
//! Validation failures are caller-recoverable. `Internal` marks a broken
//! invariant inside the crate and is never the caller's fault.

use super::model::OptionKey;

/// A single setting was given a value outside its domain
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for '{setting}': {rule}")]
pub struct ValidationError {
    /// Setting name (snake_case, as on the wire)
    pub setting: &'static str,
    /// The violated domain rule
    pub rule: String,
}

impl ValidationError {
    pub fn new(key: OptionKey, rule: impl Into<String>) -> Self {
        Self {
            setting: key.name(),
            rule: rule.into(),
        }
    }
}

/// Failures while exchanging a prepared request with the service
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid header: {0}")]
    Header(#[from] http::Error),
}

/// Top-level error for extraction calls
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Internal invariant violated (programming error)
    #[error("internal error: {details}")]
    Internal { details: String },
}

impl ExtractionError {
    pub(crate) fn internal(details: impl Into<String>) -> Self {
        let details = details.into();
        tracing::error!(%details, "text extraction invariant violated");
        Self::Internal { details }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
