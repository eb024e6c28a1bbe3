//! Domain layer - option normalization engine and service

pub mod canonical;
pub mod catalog;
pub mod headers;
pub mod pipeline;
pub mod resolver;
pub mod service;
pub mod transport;
pub mod validation;

pub use catalog::ValueKind;
pub use pipeline::{normalize, Normalized};
pub use service::Service;
pub use transport::{RecordedRequest, RecordingTransport, Transport};
pub use validation::{validate_rotate_angle, validate_timeout, validate_value};
