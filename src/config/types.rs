//! Configuration types for the payroll reference engine.
//!
//! This module contains the strongly-typed settings structures that are
//! deserialized from the YAML settings file.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::fetch::{DEFAULT_MAX_ATTEMPTS, ResourceMap, RetryPolicy};

/// Default address the HTTP API listens on.
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSettings {
    /// Socket address to bind, e.g. `0.0.0.0:3000`.
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// Retry and transport settings for the fetch client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchSettings {
    /// Total attempts per fetch.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Pause after a non-2xx response, in milliseconds.
    #[serde(default = "default_status_backoff_ms")]
    pub status_backoff_ms: u64,
    /// Per-request transport timeout in seconds. No timeout when absent.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            status_backoff_ms: default_status_backoff_ms(),
            request_timeout_secs: None,
        }
    }
}

fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

fn default_status_backoff_ms() -> u64 {
    1000
}

impl FetchSettings {
    /// The retry policy these settings describe.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            status_backoff: Duration::from_millis(self.status_backoff_ms),
        }
    }

    /// The per-request timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Where a dated table is loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum TableSourceConfig {
    /// A local directory holding `dates.json` and one file per date.
    File {
        /// The table directory.
        path: PathBuf,
    },
    /// The same layout served under a configured resource's base URL.
    Remote {
        /// The resource key whose base URL serves the table.
        resource: String,
    },
}

/// The complete settings loaded from the YAML settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Fetch client settings.
    #[serde(default)]
    pub fetch: FetchSettings,
    /// Base URLs of the external reference endpoints.
    #[serde(default)]
    pub resources: ResourceMap,
    /// Dated tables served, by name.
    #[serde(default)]
    pub tables: BTreeMap<String, TableSourceConfig>,
}
