//! Employee model.
//!
//! This module defines the Employee record holding the compensation data
//! the salary engine reads from a backing store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Identifier of an employee, assigned by the backing store.
pub type EmployeeNumber = i32;

/// Represents the compensation record of one employee.
///
/// Records are created by a backing store and are never mutated by the
/// salary engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub employee_number: EmployeeNumber,
    /// The employee's display name.
    pub name: String,
    /// The department the employee belongs to.
    pub department: String,
    /// Annual base salary.
    pub base_salary: Decimal,
    /// Bonus paid on top of the base salary.
    pub bonus: Decimal,
    /// Amount withheld from the gross salary.
    pub deductions: Decimal,
}

impl Employee {
    /// Creates a validated employee record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` if the name is blank or any monetary
    /// amount is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(
    ///     101,
    ///     "Rahul Sharma",
    ///     "Engineering",
    ///     Decimal::new(75000, 0),
    ///     Decimal::new(5000, 0),
    ///     Decimal::new(3000, 0),
    /// )
    /// .unwrap();
    /// assert_eq!(employee.gross_salary(), Decimal::new(80000, 0));
    ///
    /// let invalid = Employee::new(
    ///     102,
    ///     "Priya Patel",
    ///     "HR",
    ///     Decimal::new(65000, 0),
    ///     Decimal::new(-1, 0),
    ///     Decimal::ZERO,
    /// );
    /// assert!(invalid.is_err());
    /// ```
    pub fn new(
        employee_number: EmployeeNumber,
        name: impl Into<String>,
        department: impl Into<String>,
        base_salary: Decimal,
        bonus: Decimal,
        deductions: Decimal,
    ) -> EngineResult<Self> {
        let employee = Self {
            employee_number,
            name: name.into(),
            department: department.into(),
            base_salary,
            bonus,
            deductions,
        };
        employee.validate()?;
        Ok(employee)
    }

    /// Checks the record invariants: a non-blank name and non-negative
    /// base salary, bonus and deductions.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(self.invalid("name", "must not be empty"));
        }

        let amounts = [
            ("base_salary", self.base_salary),
            ("bonus", self.bonus),
            ("deductions", self.deductions),
        ];
        for (field, amount) in amounts {
            if amount.is_sign_negative() && !amount.is_zero() {
                return Err(self.invalid(field, &format!("must not be negative, got {}", amount)));
            }
        }

        Ok(())
    }

    /// Returns base salary plus bonus.
    pub fn gross_salary(&self) -> Decimal {
        self.base_salary + self.bonus
    }

    fn invalid(&self, field: &str, message: &str) -> EngineError {
        EngineError::InvalidEmployee {
            employee_number: self.employee_number,
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}
