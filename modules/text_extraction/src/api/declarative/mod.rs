pub mod dto;
pub mod error;
pub mod mapper;

pub use dto::ExtractionConfigDto;
pub use error::DeclarativeError;
