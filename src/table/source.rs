//! The table source capability and its configuration-driven construction.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::config::TableSourceConfig;
use crate::error::{EngineError, EngineResult};
use crate::fetch::FetchClient;
use crate::models::DatedEntry;

use super::file::FileTableSource;
use super::remote::RemoteTableSource;

/// Supplies the raw pieces of one dated table.
///
/// Implementations never cache: every call goes back to the store.
#[async_trait]
pub trait TableSource: Send + Sync {
    /// Lists the table's index entries, in whatever order the store holds them.
    async fn list_dated_entries(&self) -> EngineResult<Vec<DatedEntry>>;

    /// Loads the detail payload for the entry starting on `date_start`.
    async fn load_detail(&self, date_start: NaiveDate) -> EngineResult<Map<String, Value>>;

    /// A short description of where the table comes from, for logs.
    fn describe(&self) -> String;
}

/// Builds the source described by `config`.
///
/// Remote sources share `client`; their resource key must be configured.
pub fn build_source(
    config: &TableSourceConfig,
    client: &Arc<FetchClient>,
) -> EngineResult<Arc<dyn TableSource>> {
    Ok(match config {
        TableSourceConfig::File { path } => Arc::new(FileTableSource::new(path.clone())),
        TableSourceConfig::Remote { resource } => {
            if !client.resources().contains(resource) {
                return Err(EngineError::UnknownResource {
                    key: resource.clone(),
                });
            }
            Arc::new(RemoteTableSource::new(Arc::clone(client), resource.clone()))
        }
    })
}

/// Converts a parsed detail payload into a field map.
pub(crate) fn detail_object(value: Value, origin: &str) -> EngineResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(EngineError::ConfigParseError {
            path: origin.to_string(),
            message: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{ResourceMap, RetryPolicy};
    use crate::fetch::testing::ScriptedTransport;
    use crate::logging::RecordingLogger;
    use serde_json::json;

    fn client() -> Arc<FetchClient> {
        Arc::new(FetchClient::new(
            Arc::new(ScriptedTransport::always(crate::fetch::testing::status(500))),
            Arc::new(RecordingLogger::new()),
            [("sss", "https://ref.example.com/sss")].into_iter().collect::<ResourceMap>(),
            RetryPolicy::default(),
        ))
    }

    #[test]
    fn test_build_file_source() {
        let config = TableSourceConfig::File {
            path: "./data/pagibig".into(),
        };
        let source = build_source(&config, &client()).unwrap();
        assert!(source.describe().contains("data/pagibig"));
    }

    #[test]
    fn test_build_remote_source() {
        let config = TableSourceConfig::Remote {
            resource: "sss".to_string(),
        };
        let source = build_source(&config, &client()).unwrap();
        assert_eq!(source.describe(), "remote resource 'sss'");
    }

    #[test]
    fn test_build_remote_source_with_unknown_resource() {
        let config = TableSourceConfig::Remote {
            resource: "philhealth".to_string(),
        };
        assert!(matches!(
            build_source(&config, &client()),
            Err(EngineError::UnknownResource { ref key }) if key == "philhealth"
        ));
    }

    #[test]
    fn test_detail_object_rejects_non_objects() {
        assert!(detail_object(json!({"a": 1}), "x").is_ok());

        match detail_object(json!([1, 2]), "/data/2024-01-01.json") {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "/data/2024-01-01.json");
                assert_eq!(message, "expected a JSON object, found an array");
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
        assert!(detail_object(Value::Null, "x").is_err());
    }
}
