//! HTTP API module for the Salary Engine.
//!
//! This module provides the REST endpoints that expose salary lookups
//! to presentation clients.

mod handlers;
mod response;
mod state;

pub use handlers::{HealthResponse, create_router};
pub use response::{ApiError, ApiErrorResponse, INVALID_EMPLOYEE_NUMBER_MESSAGE};
pub use state::AppState;
