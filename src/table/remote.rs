//! Dated tables served by an external reference endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::{EngineError, EngineResult};
use crate::fetch::FetchClient;
use crate::models::DatedEntry;

use super::file::INDEX_FILE;
use super::source::{TableSource, detail_object};

/// Reads a table through the fetch client, using the same layout as
/// [`FileTableSource`](super::FileTableSource) under a resource's base URL.
#[derive(Debug, Clone)]
pub struct RemoteTableSource {
    client: Arc<FetchClient>,
    resource: String,
}

impl RemoteTableSource {
    /// Creates a source reading from the base URL of `resource`.
    pub fn new(client: Arc<FetchClient>, resource: impl Into<String>) -> Self {
        Self {
            client,
            resource: resource.into(),
        }
    }

    fn origin(&self, suffix: &str) -> String {
        self.client
            .resources()
            .url_for(&self.resource, suffix)
            .unwrap_or_else(|_| format!("{}{suffix}", self.resource))
    }
}

#[async_trait]
impl TableSource for RemoteTableSource {
    async fn list_dated_entries(&self) -> EngineResult<Vec<DatedEntry>> {
        let suffix = format!("/{INDEX_FILE}");
        let value = self.client.get_data(&self.resource, &suffix).await?;
        serde_json::from_value(value).map_err(|e| EngineError::ConfigParseError {
            path: self.origin(&suffix),
            message: e.to_string(),
        })
    }

    async fn load_detail(&self, date_start: NaiveDate) -> EngineResult<Map<String, Value>> {
        let suffix = format!("/{date_start}.json");
        let value = self.client.get_data(&self.resource, &suffix).await?;
        detail_object(value, &self.origin(&suffix))
    }

    fn describe(&self) -> String {
        format!("remote resource '{}'", self.resource)
    }
}
