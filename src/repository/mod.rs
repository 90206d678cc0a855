//! Employee lookup for the Salary Engine.
//!
//! The [`EmployeeRepository`] trait is the read-only contract the salary
//! service depends on. Concrete stores live beside it and are chosen by the
//! composition root.

mod in_memory;

use crate::error::EngineResult;
use crate::models::{Employee, EmployeeNumber};

pub use in_memory::InMemoryEmployeeRepository;

/// Resolves employees by number.
///
/// Implementations match by exact number equality only. A missing employee
/// is `Ok(None)`; `Err` is reserved for a store that cannot answer. Lookups
/// have no side effects and may be repeated freely.
pub trait EmployeeRepository: Send + Sync {
    /// Finds the employee with the given number.
    fn find_by_employee_number(
        &self,
        employee_number: EmployeeNumber,
    ) -> EngineResult<Option<Employee>>;
}
