//! Effective-date bracket selection.
//!
//! This module picks the record of a dated table that governs a given date.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::DatedConfigRecord;

/// Selects the bracket in force on `date`.
///
/// `table` must be sorted descending by `date_start`. The first record that
/// starts on or before `date` is the most recent applicable one. Dates that
/// precede every record fall back to the oldest record (the last element).
///
/// # Errors
///
/// Returns [`EngineError::NoApplicableBracket`] if `table` is empty.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_reference::calculation::select_bracket;
/// use payroll_reference::models::{ComputationType, DatedConfigRecord, DatedEntry};
/// use serde_json::Map;
///
/// let record = |y, m, d| DatedConfigRecord::merge(
///     DatedEntry {
///         date_start: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
///         computation_type: ComputationType::Maximum,
///         label: String::new(),
///     },
///     Map::new(),
/// );
/// let table = vec![record(2024, 1, 1), record(2021, 1, 1)];
///
/// let june_2024 = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let selected = select_bracket(&table, june_2024).unwrap();
/// assert_eq!(selected.date_start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// ```
pub fn select_bracket(table: &[DatedConfigRecord], date: NaiveDate) -> EngineResult<&DatedConfigRecord> {
    table
        .iter()
        .find(|record| record.date_start <= date)
        .or_else(|| table.last())
        .ok_or(EngineError::NoApplicableBracket)
}
