//! HTTP API module for the payroll reference engine.
//!
//! This module exposes the dated tables and bracket resolution to payroll
//! configuration consumers as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::BracketParams;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
