//! Symbolic names for the external reference endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Resource keys every deployment is expected to configure.
pub const KNOWN_RESOURCE_KEYS: [&str; 5] =
    ["pagibig", "sss", "philhealth", "withholding_tax", "holidays"];

/// Maps a symbolic resource key to the base URL it is fetched from.
///
/// The map is injected into the fetch client at construction, so tests and
/// environments can point any key somewhere else.
///
/// # Example
///
/// ```
/// use payroll_reference::fetch::ResourceMap;
///
/// let mut resources = ResourceMap::new();
/// resources.insert("pagibig", "https://reference.example.com/pagibig");
///
/// assert_eq!(
///     resources.url_for("pagibig", "/dates.json").unwrap(),
///     "https://reference.example.com/pagibig/dates.json"
/// );
/// assert!(resources.url_for("sss", "").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceMap {
    urls: BTreeMap<String, String>,
}

impl ResourceMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the base URL for `key`.
    pub fn insert(&mut self, key: impl Into<String>, url: impl Into<String>) {
        self.urls.insert(key.into(), url.into());
    }

    /// Returns the base URL for `key`, if configured.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.urls.get(key).map(String::as_str)
    }

    /// Returns true if `key` is configured.
    pub fn contains(&self, key: &str) -> bool {
        self.urls.contains_key(key)
    }

    /// Iterates over configured keys and URLs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.urls.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Known keys that have no URL configured.
    pub fn missing_known_keys(&self) -> Vec<&'static str> {
        KNOWN_RESOURCE_KEYS
            .iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect()
    }

    /// Builds the request target for `key` followed by `path_suffix`.
    ///
    /// The suffix is appended verbatim; no separator is inserted.
    pub fn url_for(&self, key: &str, path_suffix: &str) -> EngineResult<String> {
        let base = self.get(key).ok_or_else(|| EngineError::UnknownResource {
            key: key.to_string(),
        })?;
        Ok(format!("{base}{path_suffix}"))
    }
}

impl<K, V> FromIterator<(K, V)> for ResourceMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            urls: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
