//! Payroll reference engine.
//!
//! This crate fetches payroll reference data (Pag-IBIG, SSS, PhilHealth and
//! withholding-tax tables) from external endpoints with bounded retries, and
//! resolves the contribution bracket in force on a given date.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod table;
