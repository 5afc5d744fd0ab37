//! Bounded-retry JSON fetching.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::error::{EngineError, EngineResult};
use crate::logging::Logger;

use super::resources::ResourceMap;
use super::transport::{HttpTransport, TransportError};

/// Default number of attempts before a fetch is abandoned.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 20;

/// Default pause after a non-2xx response.
pub const DEFAULT_STATUS_BACKOFF: Duration = Duration::from_millis(1000);

const FETCH_STARTED: &str = "Fetching data from external URL.";
const FETCH_SUCCEEDED: &str = "Data fetched successfully.";

/// How many attempts a fetch may make and how long to pause after a bad status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    /// Sleep applied after a non-2xx status, before the attempt is counted.
    ///
    /// Transport and parse failures retry immediately.
    pub status_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            status_backoff: DEFAULT_STATUS_BACKOFF,
        }
    }
}

/// Why a single attempt failed. Never surfaced to callers.
#[derive(Debug, Error)]
enum AttemptError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid JSON body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetches JSON from external reference endpoints, retrying failed attempts.
///
/// Each call runs its own sequential retry loop; concurrent calls for the
/// same URL are not coalesced.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use payroll_reference::fetch::{FetchClient, ReqwestTransport, ResourceMap, RetryPolicy};
/// use payroll_reference::logging::TracingLogger;
///
/// # async fn run() -> payroll_reference::error::EngineResult<()> {
/// let mut resources = ResourceMap::new();
/// resources.insert("pagibig", "https://reference.example.com/pagibig");
///
/// let client = FetchClient::new(
///     Arc::new(ReqwestTransport::new(None)?),
///     Arc::new(TracingLogger),
///     resources,
///     RetryPolicy::default(),
/// );
/// let index = client.get_data("pagibig", "/dates.json").await?;
/// println!("{index}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn HttpTransport>,
    logger: Arc<dyn Logger>,
    resources: ResourceMap,
    policy: RetryPolicy,
}

impl FetchClient {
    /// Creates a client from its collaborators.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        logger: Arc<dyn Logger>,
        resources: ResourceMap,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            transport,
            logger,
            resources,
            policy,
        }
    }

    /// Returns the configured resource map.
    pub fn resources(&self) -> &ResourceMap {
        &self.resources
    }

    /// GETs `url` and returns its JSON body unchanged.
    ///
    /// Transport failures, non-2xx statuses and unparseable bodies each use
    /// up one attempt. Any JSON value, including `null`, `""`, `0`, `false`
    /// and `[]`, is a successful result.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FetchExhausted`] once every attempt has failed,
    /// carrying the attempt count and the last failure's message.
    pub async fn fetch_json(&self, url: &str) -> EngineResult<Value> {
        self.logger.log(FETCH_STARTED);

        let mut attempts: u32 = 0;
        let mut last_error = String::new();

        while attempts < self.policy.max_attempts {
            match self.attempt(url).await {
                Ok(value) => {
                    self.logger.log(FETCH_SUCCEEDED);
                    return Ok(value);
                }
                Err(err) => {
                    last_error = err.to_string();
                    attempts += 1;
                }
            }
        }

        let error = EngineError::FetchExhausted {
            attempts,
            message: last_error,
        };
        self.logger.log(&error.to_string());
        Err(error)
    }

    /// Fetches `path_suffix` under the base URL configured for `resource_key`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownResource`] without issuing any request if
    /// the key is not configured; otherwise the errors of [`Self::fetch_json`].
    pub async fn get_data(&self, resource_key: &str, path_suffix: &str) -> EngineResult<Value> {
        let url = self.resources.url_for(resource_key, path_suffix)?;
        self.fetch_json(&url).await
    }

    /// Fetches the base URL configured for `resource_key` with no suffix.
    pub async fn get_resource(&self, resource_key: &str) -> EngineResult<Value> {
        self.get_data(resource_key, "").await
    }

    async fn attempt(&self, url: &str) -> Result<Value, AttemptError> {
        let response = self.transport.get(url).await?;

        if !response.is_success() {
            let err = AttemptError::Status(response.status);
            self.logger.log(&err.to_string());
            tokio::time::sleep(self.policy.status_backoff).await;
            return Err(err);
        }

        Ok(serde_json::from_slice(&response.body)?)
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("resources", &self.resources)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
