//! Bracket queries and their results.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::record::DatedConfigRecord;

/// Input to a bracket resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketQuery {
    /// The salary being assessed. Accepted but not used by the flat-share model.
    pub salary: Decimal,
    /// The date whose governing bracket is wanted.
    pub date: NaiveDate,
}

impl BracketQuery {
    /// Creates a query for `salary` on `date`.
    pub fn new(salary: Decimal, date: NaiveDate) -> Self {
        Self { salary, date }
    }
}

/// The bracket governing a date, with consumer-facing shares.
///
/// Serializes as the record's own fields followed by `employeeShare` and
/// `employerShare`. The shares are written as JSON numbers with the same
/// digits as the maximum fields they were copied from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketResult {
    /// The resolved record.
    #[serde(flatten)]
    pub record: DatedConfigRecord,
    /// The employee's contribution.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub employee_share: Decimal,
    /// The employer's contribution.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub employer_share: Decimal,
}
