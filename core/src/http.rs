//! HTTP capability consumed by the remote loader.
//!
//! # Design
//! The core never performs I/O. A transport implements `HttpClient` and
//! reports the outcome of a single GET through a completion callback, on
//! whatever thread it likes. Only the status code and body bytes cross this
//! boundary; headers, timeouts and retries stay with the transport.

use thiserror::Error;
use url::Url;

/// A completed HTTP exchange described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The exchange failed before any response was produced (DNS, refused
/// connection, TLS, reset, ...).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("transport error: {message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outcome of one GET: a response or a transport failure, never both.
pub type HttpClientResult = Result<HttpResponse, TransportError>;

/// Callback receiving the outcome of a GET. Invoked exactly once.
pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Asynchronous "perform GET, deliver result" capability.
pub trait HttpClient: Send + Sync {
    /// Issue a GET for `url` and eventually call `completion` exactly once.
    fn get(&self, url: &Url, completion: HttpCompletion);
}
