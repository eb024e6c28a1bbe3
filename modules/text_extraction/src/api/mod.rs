//! API layer - construction styles and the native client
//!
//! Every style only fills an `ExtractionRequestConfig`; normalization happens
//! once, in the domain pipeline.

pub mod builder;
pub mod declarative;
pub mod functional;
pub mod native;
pub mod params;

pub use builder::ExtractionRequestBuilder;
pub use declarative::{DeclarativeError, ExtractionConfigDto};
pub use functional::{apply_options, ExtractOption};
pub use native::TextExtractionClient;
pub use params::GetTextParams;
