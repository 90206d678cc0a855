//! Core data models for the Salary Engine.
//!
//! This module contains the stored employee record and the result
//! record handed to callers.

mod employee;
mod salary_result;

pub use employee::{Employee, EmployeeNumber};
pub use salary_result::SalaryResult;
