//! Calculation logic for the Salary Engine.
//!
//! This module contains the salary calculation capability and its
//! standard net salary formula.

mod net_salary;

pub use net_salary::{SalaryCalculator, StandardSalaryCalculator};
