//! Net salary calculation.
//!
//! This module defines the [`SalaryCalculator`] capability and the
//! [`StandardSalaryCalculator`] formula used by default.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::Employee;

/// Derives a net salary from an employee record.
///
/// Implementations must be pure: the same record always yields the same
/// value. They may assume the record satisfies the [`Employee`] invariants.
/// Any error they return is passed to the caller unchanged.
pub trait SalaryCalculator: Send + Sync {
    /// Returns the net salary for `employee`.
    fn net_salary(&self, employee: &Employee) -> EngineResult<Decimal>;
}

/// The linear formula `base_salary + bonus - deductions`.
///
/// The result is not rounded and is not clamped at zero.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{SalaryCalculator, StandardSalaryCalculator};
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
///
/// let net = StandardSalaryCalculator.net_salary(&employee).unwrap();
/// assert_eq!(net, Decimal::new(77000, 0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardSalaryCalculator;

impl SalaryCalculator for StandardSalaryCalculator {
    fn net_salary(&self, employee: &Employee) -> EngineResult<Decimal> {
        let gross_salary = employee.gross_salary();
        Ok(gross_salary - employee.deductions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(base: &str, bonus: &str, deductions: &str) -> Employee {
        Employee {
            employee_number: 1,
            name: "Test Employee".to_string(),
            department: "Testing".to_string(),
            base_salary: dec(base),
            bonus: dec(bonus),
            deductions: dec(deductions),
        }
    }

    #[test]
    fn test_net_salary_for_employee_101() {
        let net = StandardSalaryCalculator
            .net_salary(&employee("75000", "5000", "3000"))
            .unwrap();
        assert_eq!(net, dec("77000"));
    }

    #[test]
    fn test_net_salary_for_employee_104() {
        let net = StandardSalaryCalculator
            .net_salary(&employee("90000", "8000", "5000"))
            .unwrap();
        assert_eq!(net, dec("93000"));
    }

    #[test]
    fn test_net_salary_can_be_negative() {
        let net = StandardSalaryCalculator
            .net_salary(&employee("1000", "0", "2500.75"))
            .unwrap();
        assert_eq!(net, dec("-1500.75"));
    }

    #[test]
    fn test_net_salary_keeps_decimal_precision() {
        let net = StandardSalaryCalculator
            .net_salary(&employee("0.10", "0.20", "0.05"))
            .unwrap();
        // 0.1 + 0.2 - 0.05 = 0.25 exactly
        assert_eq!(net, dec("0.25"));
        assert_eq!(net.to_string(), "0.25");
    }

    #[test]
    fn test_all_zero_amounts_yield_zero() {
        let net = StandardSalaryCalculator
            .net_salary(&employee("0", "0", "0"))
            .unwrap();
        assert_eq!(net, Decimal::ZERO);
    }

    #[test]
    fn test_calculator_is_usable_as_trait_object() {
        let calculator: Box<dyn SalaryCalculator> = Box::new(StandardSalaryCalculator);
        let net = calculator
            .net_salary(&employee("60000", "3000", "2000"))
            .unwrap();
        assert_eq!(net, dec("61000"));
    }
}
