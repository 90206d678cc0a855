//! Application services for the Salary Engine.
//!
//! This module holds the orchestration that turns an employee number into
//! a salary result.

mod salary_service;

pub use salary_service::{SalaryQuery, SalaryService};
