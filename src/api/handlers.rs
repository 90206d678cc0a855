//! HTTP request handlers for the Salary Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::EmployeeNumber;

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Body of the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is answering.
    pub status: String,
    /// The crate version.
    pub version: String,
}

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees/:employee_number/salary", get(salary_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /employees/:employee_number/salary.
///
/// Returns the salary result for the employee, or an error body.
async fn salary_handler(
    State(state): State<AppState>,
    employee_number: Result<Path<EmployeeNumber>, PathRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let employee_number = match employee_number {
        Ok(Path(employee_number)) => employee_number,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid employee number"
            );
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_employee_number(rejection.body_text()),
            }
            .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        employee_number,
        "Processing salary request"
    );

    let start_time = Instant::now();
    match state.salary().get_employee_salary(employee_number) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_number,
                net_salary = %result.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Salary request completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_number,
                error = %err,
                "Salary request failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
