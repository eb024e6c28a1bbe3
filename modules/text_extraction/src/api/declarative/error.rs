//! Errors raised while loading a declarative configuration document

use crate::contract::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum DeclarativeError {
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
