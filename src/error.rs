//! Error types for the payroll reference engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a caller of the fetch client, the table sources or the
//! bracket resolver can observe.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll reference engine.
///
/// Per-attempt fetch failures never appear here: the fetch client swallows
/// them until its retry budget is spent and then reports
/// [`EngineError::FetchExhausted`].
///
/// # Example
///
/// ```
/// use payroll_reference::error::EngineError;
///
/// let error = EngineError::FetchExhausted {
///     attempts: 20,
///     message: "connection refused".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Failed to fetch data after 20 attempts: connection refused"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Every attempt allowed by the retry budget failed.
    #[error("Failed to fetch data after {attempts} attempts: {message}")]
    FetchExhausted {
        /// The number of attempts made.
        attempts: u32,
        /// The message of the last underlying failure.
        message: String,
    },

    /// A resource key has no configured base URL.
    #[error("Unknown external resource: {key}")]
    UnknownResource {
        /// The key that was looked up.
        key: String,
    },

    /// The HTTP transport could not be constructed.
    #[error("Failed to build HTTP transport: {message}")]
    TransportSetup {
        /// A description of the construction failure.
        message: String,
    },

    /// Configuration or reference data was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration or reference data could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path or URL of the payload that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Two entries of one dated table share the same start date.
    #[error("Duplicate effective date in table: {date}")]
    DuplicateEffectiveDate {
        /// The repeated start date.
        date: NaiveDate,
    },

    /// A resolved bracket is missing a field required to derive shares.
    #[error("Bracket effective {date} has no numeric '{field}' field")]
    MissingShareField {
        /// The start date of the offending bracket.
        date: NaiveDate,
        /// The name of the missing field.
        field: String,
    },

    /// The dated table contained no records to resolve against.
    #[error("No applicable bracket: the dated table is empty")]
    NoApplicableBracket,

    /// No table is registered under the requested name.
    #[error("Table not found: {name}")]
    TableNotFound {
        /// The table name that was requested.
        name: String,
    },
}

impl EngineError {
    /// Returns true if this error arose while assembling a dated table.
    ///
    /// These are the failures surfaced unchanged from the table sources:
    /// missing or malformed reference data, duplicate dates, incomplete
    /// records, or an exhausted remote fetch.
    pub fn is_table_load_failure(&self) -> bool {
        matches!(
            self,
            EngineError::ConfigNotFound { .. }
                | EngineError::ConfigParseError { .. }
                | EngineError::DuplicateEffectiveDate { .. }
                | EngineError::MissingShareField { .. }
                | EngineError::FetchExhausted { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
