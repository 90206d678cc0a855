//! Terminal output for the `lookup` command.

use tracing::debug;

use crate::models::EmployeeNumber;
use crate::service::SalaryQuery;

/// Renders one salary lookup for the terminal.
///
/// Returns the labelled result on success, or `Error: {message}` when the
/// lookup fails. The caller decides where each goes and how to exit.
///
/// # Example
///
/// ```
/// use salary_engine::cli::render_lookup;
/// use salary_engine::composition::reference_salary_service;
///
/// let service = reference_salary_service();
/// assert!(render_lookup(&service, 101).unwrap().ends_with("NET SALARY: 77000"));
/// assert_eq!(
///     render_lookup(&service, 999).unwrap_err(),
///     "Error: Employee with number 999 not found."
/// );
/// ```
pub fn render_lookup(
    salary: &dyn SalaryQuery,
    employee_number: EmployeeNumber,
) -> Result<String, String> {
    match salary.get_employee_salary(employee_number) {
        Ok(result) => Ok(result.to_string()),
        Err(err) => {
            debug!(employee_number, error = %err, "Salary lookup failed");
            Err(format!("Error: {}", err))
        }
    }
}
