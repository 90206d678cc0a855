//! In-memory employee store.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, EmployeeNumber};

use super::EmployeeRepository;

/// An employee store held entirely in memory.
///
/// The store is read-only once built, so concurrent lookups need no locking.
///
/// # Example
///
/// ```
/// use salary_engine::repository::{EmployeeRepository, InMemoryEmployeeRepository};
///
/// let repository = InMemoryEmployeeRepository::reference();
/// let employee = repository.find_by_employee_number(103).unwrap().unwrap();
/// assert_eq!(employee.name, "Amit Kumar");
/// assert!(repository.find_by_employee_number(999).unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeRepository {
    employees: HashMap<EmployeeNumber, Employee>,
}

impl InMemoryEmployeeRepository {
    /// Builds a store from a list of employees.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` if a record breaks the employee invariants,
    /// or `DuplicateEmployee` if two records share a number.
    pub fn from_employees(employees: Vec<Employee>) -> EngineResult<Self> {
        let mut by_number = HashMap::with_capacity(employees.len());

        for employee in employees {
            employee.validate()?;
            let employee_number = employee.employee_number;
            if by_number.insert(employee_number, employee).is_some() {
                return Err(EngineError::DuplicateEmployee { employee_number });
            }
        }

        debug!(employees = by_number.len(), "Built in-memory employee store");
        Ok(Self {
            employees: by_number,
        })
    }

    /// Builds the store holding the five reference employees, numbered 101 to 105.
    pub fn reference() -> Self {
        let employees = reference_employees()
            .into_iter()
            .map(|employee| (employee.employee_number, employee))
            .collect();
        Self { employees }
    }

    /// Returns the number of stored employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the store holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Returns the stored employee numbers in ascending order.
    pub fn employee_numbers(&self) -> Vec<EmployeeNumber> {
        let mut numbers: Vec<EmployeeNumber> = self.employees.keys().copied().collect();
        numbers.sort_unstable();
        numbers
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn find_by_employee_number(
        &self,
        employee_number: EmployeeNumber,
    ) -> EngineResult<Option<Employee>> {
        Ok(self.employees.get(&employee_number).cloned())
    }
}

/// The reference dataset.
fn reference_employees() -> Vec<Employee> {
    let record = |employee_number, name: &str, department: &str, base, bonus, deductions| Employee {
        employee_number,
        name: name.to_string(),
        department: department.to_string(),
        base_salary: Decimal::new(base, 0),
        bonus: Decimal::new(bonus, 0),
        deductions: Decimal::new(deductions, 0),
    };

    vec![
        record(101, "Rahul Sharma", "Engineering", 75000, 5000, 3000),
        record(102, "Priya Patel", "HR", 65000, 4000, 2500),
        record(103, "Amit Kumar", "Finance", 80000, 6000, 4000),
        record(104, "Sneha Reddy", "Engineering", 90000, 8000, 5000),
        record(105, "Vikram Singh", "Marketing", 60000, 3000, 2000),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(employee_number: EmployeeNumber, name: &str) -> Employee {
        Employee {
            employee_number,
            name: name.to_string(),
            department: "Engineering".to_string(),
            base_salary: Decimal::new(50000, 0),
            bonus: Decimal::ZERO,
            deductions: Decimal::new(1000, 0),
        }
    }

    #[test]
    fn test_reference_store_holds_five_employees() {
        let repository = InMemoryEmployeeRepository::reference();
        assert_eq!(repository.len(), 5);
        assert_eq!(repository.employee_numbers(), vec![101, 102, 103, 104, 105]);
    }

    #[test]
    fn test_reference_employees_satisfy_invariants() {
        for employee in reference_employees() {
            assert!(employee.validate().is_ok(), "{:?}", employee);
        }
    }

    #[test]
    fn test_find_returns_exact_match() {
        let repository = InMemoryEmployeeRepository::reference();
        let found = repository.find_by_employee_number(104).unwrap().unwrap();

        assert_eq!(found.employee_number, 104);
        assert_eq!(found.name, "Sneha Reddy");
        assert_eq!(found.department, "Engineering");
        assert_eq!(found.base_salary, Decimal::new(90000, 0));
        assert_eq!(found.bonus, Decimal::new(8000, 0));
        assert_eq!(found.deductions, Decimal::new(5000, 0));
    }

    #[test]
    fn test_find_missing_returns_none() {
        let repository = InMemoryEmployeeRepository::reference();
        assert_eq!(repository.find_by_employee_number(999).unwrap(), None);
        assert_eq!(repository.find_by_employee_number(0).unwrap(), None);
        assert_eq!(repository.find_by_employee_number(-101).unwrap(), None);
    }

    #[test]
    fn test_find_is_repeatable() {
        let repository = InMemoryEmployeeRepository::reference();
        let first = repository.find_by_employee_number(102).unwrap();
        let second = repository.find_by_employee_number(102).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_employees_rejects_duplicates() {
        let result = InMemoryEmployeeRepository::from_employees(vec![
            employee(1, "First"),
            employee(2, "Second"),
            employee(1, "Again"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            EngineError::DuplicateEmployee { employee_number: 1 }
        );
    }

    #[test]
    fn test_from_employees_rejects_invalid_records() {
        let mut broken = employee(3, "Broken");
        broken.bonus = Decimal::new(-5, 0);

        let result = InMemoryEmployeeRepository::from_employees(vec![broken]);
        assert!(matches!(
            result,
            Err(EngineError::InvalidEmployee {
                employee_number: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_store_finds_nothing() {
        let repository = InMemoryEmployeeRepository::from_employees(vec![]).unwrap();
        assert!(repository.is_empty());
        assert_eq!(repository.find_by_employee_number(101).unwrap(), None);
    }
}
