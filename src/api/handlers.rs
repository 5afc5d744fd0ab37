//! HTTP request handlers for the payroll reference API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::BracketQuery;

use super::request::BracketParams;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/tables/:name", get(table_handler))
        .route("/tables/:name/bracket", get(bracket_handler))
        .with_state(state)
}

async fn health_handler() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Handler for `GET /tables/{name}`.
///
/// Returns every record of the table, newest bracket first.
async fn table_handler(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, table = %name, "Loading dated table");

    let start_time = Instant::now();
    match state.registry().get_table(&name).await {
        Ok(table) => {
            info!(
                correlation_id = %correlation_id,
                table = %name,
                records = table.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Table loaded"
            );
            (StatusCode::OK, Json(table)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, table = %name, error = %err, "Table load failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /tables/{name}/bracket?salary=..&date=..`.
async fn bracket_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    params: Result<Query<BracketParams>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query: BracketQuery = match params {
        Ok(Query(params)) => params.into(),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid bracket query"
            );
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(rejection.body_text()),
            }
            .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        table = %name,
        date = %query.date,
        "Resolving bracket"
    );

    let start_time = Instant::now();
    match state.registry().get_bracket(&name, &query).await {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                table = %name,
                effective = %result.record.date_start,
                duration_us = start_time.elapsed().as_micros(),
                "Bracket resolved"
            );
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, table = %name, error = %err, "Bracket resolution failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
