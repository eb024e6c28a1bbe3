//! Infrastructure layer - concrete transports

pub mod http;
