//! Dated tables stored as JSON files on local disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{EngineError, EngineResult};
use crate::models::DatedEntry;

use super::source::{TableSource, detail_object};

/// Name of the index file inside a table directory.
pub const INDEX_FILE: &str = "dates.json";

/// Reads a table from a directory.
///
/// # Directory Structure
///
/// ```text
/// data/pagibig/
/// ├── dates.json        # [{"dateStart", "computationType", "label"}, ...]
/// ├── 2021-01-01.json   # detail fields for the 2021-01-01 bracket
/// └── 2024-02-01.json
/// ```
#[derive(Debug, Clone)]
pub struct FileTableSource {
    root: PathBuf,
}

impl FileTableSource {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|_| EngineError::ConfigNotFound {
                path: path_str.clone(),
            })?;

        serde_json::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl TableSource for FileTableSource {
    async fn list_dated_entries(&self) -> EngineResult<Vec<DatedEntry>> {
        Self::read_json(&self.root.join(INDEX_FILE)).await
    }

    async fn load_detail(&self, date_start: NaiveDate) -> EngineResult<Map<String, Value>> {
        let path = self.root.join(format!("{date_start}.json"));
        let value: Value = Self::read_json(&path).await?;
        detail_object(value, &path.display().to_string())
    }

    fn describe(&self) -> String {
        format!("directory '{}'", self.root.display())
    }
}
