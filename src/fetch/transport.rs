//! The HTTP transport seam used by the fetch client.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::{EngineError, EngineResult};

/// A failure of the transport itself, before any status code is known.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("timeout")]
    Timeout,
    /// Connection, DNS or TLS failure.
    #[error("connect/dns/tls error: {0}")]
    Network(String),
    /// Any other transport failure, including reading the body.
    #[error("http error: {0}")]
    Other(String),
}

/// The raw outcome of a GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The undecoded response body.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues HTTP GET requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs a single GET against `url`.
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError>;
}

/// [`HttpTransport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport with an optional per-request timeout.
    pub fn new(timeout: Option<Duration>) -> EngineResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("payroll-reference/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| EngineError::TransportSetup {
            message: e.to_string(),
        })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        return TransportError::Timeout;
    }
    if e.is_connect() || e.is_request() {
        return TransportError::Network(e.to_string());
    }
    TransportError::Other(e.to_string())
}
