//! The salary orchestrator.
//!
//! [`SalaryService`] resolves an employee through an [`EmployeeRepository`],
//! prices them through a [`SalaryCalculator`] and returns a [`SalaryResult`].
//! It knows neither the concrete store nor the concrete formula.

use std::sync::Arc;

use tracing::debug;

use crate::calculation::SalaryCalculator;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeNumber, SalaryResult};
use crate::repository::EmployeeRepository;

/// Answers salary requests for presentation layers.
pub trait SalaryQuery: Send + Sync {
    /// Returns the salary result for the employee with the given number.
    ///
    /// Fails with `EmployeeNotFound` when no employee matches. Other errors
    /// come from the underlying store or calculator.
    fn get_employee_salary(&self, employee_number: EmployeeNumber) -> EngineResult<SalaryResult>;
}

/// Composes an employee store and a salary calculator.
///
/// The service holds nothing but its two collaborators, so one instance can
/// be shared between threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use salary_engine::calculation::StandardSalaryCalculator;
/// use salary_engine::error::EngineError;
/// use salary_engine::repository::InMemoryEmployeeRepository;
/// use salary_engine::service::SalaryService;
/// use rust_decimal::Decimal;
///
/// let service = SalaryService::new(
///     Arc::new(InMemoryEmployeeRepository::reference()),
///     Arc::new(StandardSalaryCalculator),
/// );
///
/// let result = service.get_employee_salary(101).unwrap();
/// assert_eq!(result.net_salary, Decimal::new(77000, 0));
///
/// let missing = service.get_employee_salary(999).unwrap_err();
/// assert_eq!(missing, EngineError::EmployeeNotFound { employee_number: 999 });
/// ```
pub struct SalaryService<R, C>
where
    R: EmployeeRepository + ?Sized,
    C: SalaryCalculator + ?Sized,
{
    employees: Arc<R>,
    calculator: Arc<C>,
}

impl<R, C> SalaryService<R, C>
where
    R: EmployeeRepository + ?Sized,
    C: SalaryCalculator + ?Sized,
{
    /// Creates a service over the given store and calculator.
    pub fn new(employees: Arc<R>, calculator: Arc<C>) -> Self {
        Self {
            employees,
            calculator,
        }
    }

    /// Returns the salary result for the employee with the given number.
    ///
    /// The calculator is only consulted once the employee has been found.
    pub fn get_employee_salary(
        &self,
        employee_number: EmployeeNumber,
    ) -> EngineResult<SalaryResult> {
        let employee = self
            .employees
            .find_by_employee_number(employee_number)?
            .ok_or(EngineError::EmployeeNotFound { employee_number })?;

        let net_salary = self.calculator.net_salary(&employee)?;
        debug!(
            employee_number,
            net_salary = %net_salary,
            "Calculated net salary"
        );

        Ok(SalaryResult::from_employee(&employee, net_salary))
    }
}

impl<R, C> SalaryQuery for SalaryService<R, C>
where
    R: EmployeeRepository + ?Sized,
    C: SalaryCalculator + ?Sized,
{
    fn get_employee_salary(&self, employee_number: EmployeeNumber) -> EngineResult<SalaryResult> {
        SalaryService::get_employee_salary(self, employee_number)
    }
}

impl<R, C> Clone for SalaryService<R, C>
where
    R: EmployeeRepository + ?Sized,
    C: SalaryCalculator + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            employees: Arc::clone(&self.employees),
            calculator: Arc::clone(&self.calculator),
        }
    }
}
