//! Calculation logic for the payroll reference engine.
//!
//! This module contains the pure functions applied to an already-loaded
//! dated table: selecting the bracket in force on a date, and deriving the
//! employee and employer shares from it.

mod bracket_selection;
mod share_derivation;

pub use bracket_selection::select_bracket;
pub use share_derivation::{
    MAXIMUM_EMPLOYEE_SHARE_FIELD, MAXIMUM_EMPLOYER_SHARE_FIELD, derive_shares,
};
