//! Application state for the Salary Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::SalaryQuery;

/// Shared application state.
///
/// Handlers only see the [`SalaryQuery`] abstraction, never the store or
/// calculator behind it.
#[derive(Clone)]
pub struct AppState {
    salary: Arc<dyn SalaryQuery>,
}

impl AppState {
    /// Creates a new application state around the given salary service.
    pub fn new<S>(salary: S) -> Self
    where
        S: SalaryQuery + 'static,
    {
        Self {
            salary: Arc::new(salary),
        }
    }

    /// Returns the salary service.
    pub fn salary(&self) -> &dyn SalaryQuery {
        self.salary.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::reference_salary_service;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_salary_service() {
        let state = AppState::new(reference_salary_service());
        let result = state.salary().get_employee_salary(101).unwrap();
        assert_eq!(result.employee_name, "Rahul Sharma");
    }
}
