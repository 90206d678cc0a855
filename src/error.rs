//! Error types for the Salary Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while resolving and calculating
//! an employee's salary.

use thiserror::Error;

use crate::models::EmployeeNumber;

/// The main error type for the Salary Engine.
///
/// The orchestrator introduces exactly one variant of its own,
/// [`EngineError::EmployeeNotFound`]. Every other variant originates in a
/// concrete store, calculator or configuration loader and reaches the caller
/// unchanged.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound { employee_number: 999 };
/// assert_eq!(error.to_string(), "Employee with number 999 not found.");
/// assert!(error.is_not_found());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No employee matches the requested number.
    #[error("Employee with number {employee_number} not found.")]
    EmployeeNotFound {
        /// The employee number that was requested.
        employee_number: EmployeeNumber,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// An employee record broke one of the record invariants.
    #[error("Invalid employee {employee_number} field '{field}': {message}")]
    InvalidEmployee {
        /// The number of the offending employee.
        employee_number: EmployeeNumber,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A dataset listed the same employee number more than once.
    #[error("Duplicate employee number: {employee_number}")]
    DuplicateEmployee {
        /// The repeated employee number.
        employee_number: EmployeeNumber,
    },

    /// The backing store could not serve a lookup.
    #[error("Employee store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// A salary calculator failed.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Returns true if this error signals that no employee matched.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::EmployeeNotFound { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
