//! Derivation of employee and employer shares from a resolved bracket.
//!
//! Contributions follow a flat-share model: the shares are the bracket's
//! maximum amounts, copied as-is. The salary in the query is never used to
//! scale them.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{BracketResult, ComputationType, DatedConfigRecord};

/// Detail field holding the employee's maximum contribution.
pub const MAXIMUM_EMPLOYEE_SHARE_FIELD: &str = "maximumEmployeeShare";

/// Detail field holding the employer's maximum contribution.
pub const MAXIMUM_EMPLOYER_SHARE_FIELD: &str = "maximumEmployerShare";

/// Output keys added by derivation; removed from the record's own fields.
const DERIVED_KEYS: [&str; 2] = ["employeeShare", "employerShare"];

/// Builds the consumer-facing result for `record`.
///
/// The salary is deliberately absent from the signature.
///
/// # Errors
///
/// Returns [`EngineError::MissingShareField`] if either maximum field is
/// absent or not numeric.
pub fn derive_shares(record: &DatedConfigRecord) -> EngineResult<BracketResult> {
    let (employee_share, employer_share) = match record.computation_type {
        ComputationType::Maximum => (
            required_decimal(record, MAXIMUM_EMPLOYEE_SHARE_FIELD)?,
            required_decimal(record, MAXIMUM_EMPLOYER_SHARE_FIELD)?,
        ),
    };

    let mut record = record.clone();
    for key in DERIVED_KEYS {
        record.fields.remove(key);
    }

    Ok(BracketResult {
        record,
        employee_share,
        employer_share,
    })
}

fn required_decimal(record: &DatedConfigRecord, field: &str) -> EngineResult<Decimal> {
    record
        .decimal_field(field)
        .ok_or_else(|| EngineError::MissingShareField {
            date: record.date_start,
            field: field.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DatedEntry;
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use std::str::FromStr;

    fn record_with(detail: Value) -> DatedConfigRecord {
        DatedConfigRecord::merge(
            DatedEntry {
                date_start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                computation_type: ComputationType::Maximum,
                label: "Pag-IBIG 2024".to_string(),
            },
            detail.as_object().unwrap().clone(),
        )
    }

    #[test]
    fn test_shares_are_copied_from_maximum_fields() {
        let record = record_with(json!({
            "maximumEmployeeShare": 200,
            "maximumEmployerShare": 250.75,
            "maximumMonthlyCompensation": 10000
        }));

        let result = derive_shares(&record).unwrap();

        assert_eq!(result.employee_share, Decimal::from(200));
        assert_eq!(result.employer_share, Decimal::from_str("250.75").unwrap());
        assert_eq!(result.record.fields["maximumMonthlyCompensation"], json!(10000));
    }

    #[test]
    fn test_missing_employee_share_is_an_error() {
        let record = record_with(json!({"maximumEmployerShare": 200}));

        match derive_shares(&record) {
            Err(EngineError::MissingShareField { date, field }) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
                assert_eq!(field, MAXIMUM_EMPLOYEE_SHARE_FIELD);
            }
            other => panic!("Expected MissingShareField, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_employer_share_is_an_error() {
        let record = record_with(json!({
            "maximumEmployeeShare": 200,
            "maximumEmployerShare": "two hundred"
        }));

        assert!(matches!(
            derive_shares(&record),
            Err(EngineError::MissingShareField { ref field, .. }) if field == MAXIMUM_EMPLOYER_SHARE_FIELD
        ));
    }

    #[test]
    fn test_stale_derived_keys_in_detail_are_replaced() {
        let record = record_with(json!({
            "maximumEmployeeShare": 100,
            "maximumEmployerShare": 100,
            "employeeShare": 1,
            "employerShare": 2
        }));

        let result = derive_shares(&record).unwrap();
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["employeeShare"], 100);
        assert_eq!(value["employerShare"], 100);
    }
}
