pub mod client;

pub use client::TextExtractionClient;
