//! Effective-dated configuration records.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How consumer-facing fields are derived from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputationType {
    /// Shares are the record's maximum amounts, whatever the salary.
    Maximum,
}

/// One row of a table's `dates.json` index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedEntry {
    /// First day the bracket applies (inclusive).
    pub date_start: NaiveDate,
    /// How shares are derived for this bracket.
    pub computation_type: ComputationType,
    /// Human-readable description.
    pub label: String,
}

/// An index entry merged with its detail payload.
///
/// A record applies from `date_start` until the next record's start, or
/// indefinitely for the newest record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedConfigRecord {
    /// First day the bracket applies (inclusive).
    pub date_start: NaiveDate,
    /// How shares are derived for this bracket.
    pub computation_type: ComputationType,
    /// Human-readable description.
    pub label: String,
    /// Every other field of the detail payload, as loaded.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Keys owned by the index; detail payloads cannot override them.
const INDEX_KEYS: [&str; 3] = ["dateStart", "computationType", "label"];

impl DatedConfigRecord {
    /// Merges an index entry with its detail payload.
    ///
    /// Detail keys that collide with index fields are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use payroll_reference::models::{ComputationType, DatedConfigRecord, DatedEntry};
    /// use serde_json::json;
    ///
    /// let entry = DatedEntry {
    ///     date_start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    ///     computation_type: ComputationType::Maximum,
    ///     label: "Pag-IBIG 2024".to_string(),
    /// };
    /// let detail = json!({"maximumEmployeeShare": 200, "label": "ignored"});
    ///
    /// let record = DatedConfigRecord::merge(entry, detail.as_object().unwrap().clone());
    /// assert_eq!(record.label, "Pag-IBIG 2024");
    /// assert_eq!(record.fields.len(), 1);
    /// ```
    pub fn merge(entry: DatedEntry, mut detail: Map<String, Value>) -> Self {
        for key in INDEX_KEYS {
            detail.remove(key);
        }
        Self {
            date_start: entry.date_start,
            computation_type: entry.computation_type,
            label: entry.label,
            fields: detail,
        }
    }

    /// Reads a detail field as an exact decimal.
    ///
    /// JSON numbers are converted through their textual form so no binary
    /// floating-point rounding is introduced. Numeric strings are accepted.
    pub fn decimal_field(&self, name: &str) -> Option<Decimal> {
        let text = match self.fields.get(name)? {
            Value::Number(number) => number.to_string(),
            Value::String(text) => text.trim().to_string(),
            _ => return None,
        };
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(date: &str) -> DatedEntry {
        DatedEntry {
            date_start: NaiveDate::from_str(date).unwrap(),
            computation_type: ComputationType::Maximum,
            label: format!("Bracket {date}"),
        }
    }

    fn detail(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_deserialize_dated_entry() {
        let json = r#"{
            "dateStart": "2024-02-01",
            "computationType": "maximum",
            "label": "Pag-IBIG contribution (2024)"
        }"#;

        let entry: DatedEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date_start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(entry.computation_type, ComputationType::Maximum);
        assert_eq!(entry.label, "Pag-IBIG contribution (2024)");
    }

    #[test]
    fn test_deserialize_rejects_unknown_computation_type() {
        let json = r#"{"dateStart": "2024-02-01", "computationType": "percentage", "label": "x"}"#;
        assert!(serde_json::from_str::<DatedEntry>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_malformed_date() {
        let json = r#"{"dateStart": "02/01/2024", "computationType": "maximum", "label": "x"}"#;
        assert!(serde_json::from_str::<DatedEntry>(json).is_err());
    }

    #[test]
    fn test_merge_keeps_index_fields_authoritative() {
        let record = DatedConfigRecord::merge(
            entry("2021-01-01"),
            detail(json!({
                "dateStart": "1999-01-01",
                "computationType": "other",
                "label": "from detail",
                "maximumEmployeeShare": 100
            })),
        );

        assert_eq!(record.date_start, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(record.label, "Bracket 2021-01-01");
        assert_eq!(record.fields.len(), 1);
        assert_eq!(record.fields["maximumEmployeeShare"], json!(100));
    }

    #[test]
    fn test_serialize_flattens_detail_fields() {
        let record = DatedConfigRecord::merge(
            entry("2021-01-01"),
            detail(json!({"maximumEmployerShare": 100, "maximumCompensation": 5000})),
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "dateStart": "2021-01-01",
                "computationType": "maximum",
                "label": "Bracket 2021-01-01",
                "maximumEmployerShare": 100,
                "maximumCompensation": 5000
            })
        );
    }

    #[test]
    fn test_decimal_field_reads_numbers_exactly() {
        let record = DatedConfigRecord::merge(
            entry("2021-01-01"),
            detail(json!({
                "integer": 200,
                "fraction": 581.3,
                "text": " 1125.50 ",
                "scientific": 1e3,
                "flag": true
            })),
        );

        assert_eq!(record.decimal_field("integer"), Some(Decimal::from(200)));
        assert_eq!(
            record.decimal_field("fraction"),
            Some(Decimal::from_str("581.3").unwrap())
        );
        assert_eq!(
            record.decimal_field("text"),
            Some(Decimal::from_str("1125.50").unwrap())
        );
        assert_eq!(record.decimal_field("scientific"), Some(Decimal::from(1000)));
        assert_eq!(record.decimal_field("flag"), None);
        assert_eq!(record.decimal_field("absent"), None);
    }
}
