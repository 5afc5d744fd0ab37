//! Effective-date bracket resolution over a freshly loaded table.

use std::sync::Arc;

use futures_util::future::try_join_all;

use crate::calculation::{derive_shares, select_bracket};
use crate::error::{EngineError, EngineResult};
use crate::logging::Logger;
use crate::models::{BracketQuery, BracketResult, DatedConfigRecord};

use super::source::TableSource;

/// Resolves brackets for one dated table.
///
/// The resolver holds no table state: every call reloads through its source.
#[derive(Clone)]
pub struct BracketResolver {
    source: Arc<dyn TableSource>,
    logger: Arc<dyn Logger>,
}

impl BracketResolver {
    /// Creates a resolver over `source`.
    pub fn new(source: Arc<dyn TableSource>, logger: Arc<dyn Logger>) -> Self {
        Self { source, logger }
    }

    /// Loads the full table, sorted descending by start date.
    ///
    /// Every detail payload is requested at once and the results are joined;
    /// if any load fails the whole table fails and nothing partial is returned.
    ///
    /// # Errors
    ///
    /// Propagates source failures unchanged, and returns
    /// [`EngineError::DuplicateEffectiveDate`] if two index entries share a
    /// start date.
    pub async fn load_table(&self) -> EngineResult<Vec<DatedConfigRecord>> {
        let mut entries = self.source.list_dated_entries().await?;
        entries.sort_by(|a, b| b.date_start.cmp(&a.date_start));

        if let Some(pair) = entries
            .windows(2)
            .find(|pair| pair[0].date_start == pair[1].date_start)
        {
            return Err(EngineError::DuplicateEffectiveDate {
                date: pair[0].date_start,
            });
        }

        let details = try_join_all(
            entries
                .iter()
                .map(|entry| self.source.load_detail(entry.date_start)),
        )
        .await?;

        let table: Vec<DatedConfigRecord> = entries
            .into_iter()
            .zip(details)
            .map(|(entry, detail)| DatedConfigRecord::merge(entry, detail))
            .collect();

        self.logger.log(&format!(
            "Loaded {} dated records from {}.",
            table.len(),
            self.source.describe()
        ));

        Ok(table)
    }

    /// Resolves the bracket governing `query.date` and derives its shares.
    ///
    /// The salary does not affect the result.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::load_table`] failures; returns
    /// [`EngineError::NoApplicableBracket`] for an empty table and
    /// [`EngineError::MissingShareField`] for an incomplete record.
    pub async fn resolve_bracket(&self, query: &BracketQuery) -> EngineResult<BracketResult> {
        let table = self.load_table().await?;
        let record = select_bracket(&table, query.date)?;
        let result = derive_shares(record)?;

        self.logger.log(&format!(
            "Resolved bracket effective {} for {}.",
            result.record.date_start, query.date
        ));

        Ok(result)
    }
}

impl std::fmt::Debug for BracketResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BracketResolver")
            .field("source", &self.source.describe())
            .finish_non_exhaustive()
    }
}
