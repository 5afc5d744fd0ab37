//! Dated configuration tables and bracket resolution.
//!
//! A [`TableSource`] supplies a table's index and per-date detail payloads,
//! either from local JSON files ([`FileTableSource`]) or from an external
//! endpoint through the fetch client ([`RemoteTableSource`]). A
//! [`BracketResolver`] assembles the table and picks the bracket in force on
//! a date; a [`TableRegistry`] names the resolvers a deployment serves.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use rust_decimal::Decimal;
//! use payroll_reference::logging::TracingLogger;
//! use payroll_reference::models::BracketQuery;
//! use payroll_reference::table::{BracketResolver, FileTableSource};
//!
//! # async fn run() -> payroll_reference::error::EngineResult<()> {
//! let resolver = BracketResolver::new(
//!     Arc::new(FileTableSource::new("./data/pagibig")),
//!     Arc::new(TracingLogger),
//! );
//! let query = BracketQuery::new(Decimal::from(25000), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
//! let bracket = resolver.resolve_bracket(&query).await?;
//! println!("employee share: {}", bracket.employee_share);
//! # Ok(())
//! # }
//! ```

mod file;
mod registry;
mod remote;
mod resolver;
mod source;

pub use file::{FileTableSource, INDEX_FILE};
pub use registry::TableRegistry;
pub use remote::RemoteTableSource;
pub use resolver::BracketResolver;
pub use source::{TableSource, build_source};
