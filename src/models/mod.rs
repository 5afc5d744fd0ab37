//! Core data models for the payroll reference engine.
//!
//! This module contains the dated configuration records loaded from table
//! sources and the query/result types of bracket resolution.

mod bracket;
mod record;

pub use bracket::{BracketQuery, BracketResult};
pub use record::{ComputationType, DatedConfigRecord, DatedEntry};
