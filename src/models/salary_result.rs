//! Salary result model.
//!
//! This module contains the [`SalaryResult`] type returned to presentation
//! layers. It is a projection of an [`Employee`] plus the computed net salary,
//! so callers never handle the stored record itself.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Employee, EmployeeNumber};

/// The presentation-safe outcome of one salary request.
///
/// # Example
///
/// ```
/// use salary_engine::models::{Employee, SalaryResult};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(
///     104,
///     "Sneha Reddy",
///     "Engineering",
///     Decimal::new(90000, 0),
///     Decimal::new(8000, 0),
///     Decimal::new(5000, 0),
/// )
/// .unwrap();
///
/// let result = SalaryResult::from_employee(&employee, Decimal::new(93000, 0));
/// assert_eq!(result.employee_name, "Sneha Reddy");
/// assert_eq!(result.net_salary, Decimal::new(93000, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// The employee's number.
    pub employee_number: EmployeeNumber,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's department.
    pub department: String,
    /// Base salary as stored.
    pub base_salary: Decimal,
    /// Bonus as stored.
    pub bonus: Decimal,
    /// Deductions as stored.
    pub deductions: Decimal,
    /// Base salary plus bonus minus deductions. May be negative.
    pub net_salary: Decimal,
}

impl SalaryResult {
    /// Copies the display fields of `employee` verbatim and attaches `net_salary`.
    pub fn from_employee(employee: &Employee, net_salary: Decimal) -> Self {
        Self {
            employee_number: employee.employee_number,
            employee_name: employee.name.clone(),
            department: employee.department.clone(),
            base_salary: employee.base_salary,
            bonus: employee.bonus,
            deductions: employee.deductions,
            net_salary,
        }
    }
}

impl fmt::Display for SalaryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Employee #: {}", self.employee_number)?;
        writeln!(f, "Name: {}", self.employee_name)?;
        writeln!(f, "Department: {}", self.department)?;
        writeln!(f, "Base Salary: {}", self.base_salary)?;
        writeln!(f, "Bonus: {}", self.bonus)?;
        writeln!(f, "Deductions: {}", self.deductions)?;
        write!(f, "NET SALARY: {}", self.net_salary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee {
            employee_number: 102,
            name: "Priya Patel".to_string(),
            department: "HR".to_string(),
            base_salary: dec("65000"),
            bonus: dec("4000"),
            deductions: dec("2500"),
        }
    }

    #[test]
    fn test_from_employee_copies_fields_verbatim() {
        let employee = create_test_employee();
        let result = SalaryResult::from_employee(&employee, dec("66500"));

        assert_eq!(result.employee_number, employee.employee_number);
        assert_eq!(result.employee_name, employee.name);
        assert_eq!(result.department, employee.department);
        assert_eq!(result.base_salary, employee.base_salary);
        assert_eq!(result.bonus, employee.bonus);
        assert_eq!(result.deductions, employee.deductions);
        assert_eq!(result.net_salary, dec("66500"));
    }

    #[test]
    fn test_display_renders_labelled_lines() {
        let result = SalaryResult::from_employee(&create_test_employee(), dec("66500"));

        let expected = "Employee #: 102\n\
                        Name: Priya Patel\n\
                        Department: HR\n\
                        Base Salary: 65000\n\
                        Bonus: 4000\n\
                        Deductions: 2500\n\
                        NET SALARY: 66500";
        assert_eq!(result.to_string(), expected);
    }

    #[test]
    fn test_display_keeps_negative_net_salary() {
        let mut employee = create_test_employee();
        employee.deductions = dec("70000.50");
        let result = SalaryResult::from_employee(&employee, dec("-999.50"));

        assert!(result.to_string().ends_with("NET SALARY: -999.50"));
    }

    #[test]
    fn test_serialize_uses_string_decimals() {
        let result = SalaryResult::from_employee(&create_test_employee(), dec("66500"));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["employee_name"], "Priya Patel");
        assert_eq!(json["net_salary"], "66500");
        assert_eq!(json["employee_number"], 102);
    }
}
