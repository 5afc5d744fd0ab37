//! Request types for the payroll reference API.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::BracketQuery;

/// Query string of `GET /tables/{name}/bracket`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BracketParams {
    /// The salary being assessed.
    pub salary: Decimal,
    /// The date to resolve, as `YYYY-MM-DD`.
    pub date: NaiveDate,
}

impl From<BracketParams> for BracketQuery {
    fn from(params: BracketParams) -> Self {
        BracketQuery::new(params.salary, params.date)
    }
}
