//! Transport abstraction for sending prepared requests

use crate::contract::{PreparedRequest, TransportError};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use std::sync::Arc;

/// Sends one prepared request and returns the response body as text
///
/// Implementations own the HTTP verb, endpoint and transport-level errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: PreparedRequest) -> Result<String, TransportError>;
}

/// A request captured by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// Header names and wire values, in send order
    pub headers: Vec<(&'static str, String)>,
    pub body: Bytes,
}

/// In-memory transport for tests
///
/// Records every request and answers with a fixed body, or with a status
/// error once [`RecordingTransport::fail_with`] was called.
#[derive(Clone)]
pub struct RecordingTransport {
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
    response: Arc<RwLock<Result<String, (u16, String)>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::responding_with("")
    }

    pub fn responding_with(body: impl Into<String>) -> Self {
        Self {
            requests: Arc::new(RwLock::new(Vec::new())),
            response: Arc::new(RwLock::new(Ok(body.into()))),
        }
    }

    /// Answer every following request with an error status
    pub fn fail_with(&self, status: u16, body: impl Into<String>) {
        *self.response.write() = Err((status, body.into()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.read().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.read().len()
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: PreparedRequest) -> Result<String, TransportError> {
        let (headers, document) = request.into_parts();
        self.requests.write().push(RecordedRequest {
            headers: headers.to_wire_pairs(),
            body: document.into_bytes(),
        });

        match &*self.response.read() {
            Ok(body) => Ok(body.clone()),
            Err((status, body)) => Err(TransportError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
