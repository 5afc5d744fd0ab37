//! Named contribution tables.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::Settings;
use crate::error::{EngineError, EngineResult};
use crate::fetch::FetchClient;
use crate::logging::Logger;
use crate::models::{BracketQuery, BracketResult, DatedConfigRecord};

use super::resolver::BracketResolver;
use super::source::build_source;

/// Maps table names (e.g. `pagibig`) to their resolvers.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    resolvers: BTreeMap<String, BracketResolver>,
}

impl TableRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds one resolver per table declared in `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownResource`] if a remote table names a
    /// resource that `client` has no URL for.
    pub fn from_settings(
        settings: &Settings,
        client: Arc<FetchClient>,
        logger: Arc<dyn Logger>,
    ) -> EngineResult<Self> {
        let mut registry = Self::new();
        for (name, source_config) in &settings.tables {
            let source = build_source(source_config, &client)?;
            registry.insert(name.clone(), BracketResolver::new(source, Arc::clone(&logger)));
        }
        Ok(registry)
    }

    /// Registers `resolver` under `name`, replacing any previous one.
    pub fn insert(&mut self, name: impl Into<String>, resolver: BracketResolver) {
        self.resolvers.insert(name.into(), resolver);
    }

    /// Table names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(String::as_str)
    }

    /// Returns the resolver for `name`.
    pub fn get(&self, name: &str) -> EngineResult<&BracketResolver> {
        self.resolvers
            .get(name)
            .ok_or_else(|| EngineError::TableNotFound {
                name: name.to_string(),
            })
    }

    /// Loads the named table, newest bracket first.
    pub async fn get_table(&self, name: &str) -> EngineResult<Vec<DatedConfigRecord>> {
        self.get(name)?.load_table().await
    }

    /// Resolves a bracket in the named table.
    pub async fn get_bracket(&self, name: &str, query: &BracketQuery) -> EngineResult<BracketResult> {
        self.get(name)?.resolve_bracket(query).await
    }
}
