//! Dependency wiring for the Salary Engine.
//!
//! This is the only module that names concrete stores and calculators.
//! Everything it builds is returned to the caller; nothing is kept in
//! global state.

use std::sync::Arc;

use tracing::info;

use crate::api::AppState;
use crate::calculation::StandardSalaryCalculator;
use crate::config::{AppConfig, ConfigLoader};
use crate::error::EngineResult;
use crate::repository::InMemoryEmployeeRepository;
use crate::service::SalaryService;

/// The salary service as wired by this module.
pub type DefaultSalaryService = SalaryService<InMemoryEmployeeRepository, StandardSalaryCalculator>;

/// Builds the employee store described by `config`.
///
/// Loads `data.employees_file` when set, otherwise returns the reference
/// employees.
pub fn build_employee_repository(config: &AppConfig) -> EngineResult<InMemoryEmployeeRepository> {
    match &config.data.employees_file {
        Some(path) => {
            let employees = ConfigLoader::load_employees(path)?;
            let repository = InMemoryEmployeeRepository::from_employees(employees)?;
            info!(
                path = %path.display(),
                employees = repository.len(),
                "Loaded employee dataset"
            );
            Ok(repository)
        }
        None => {
            let repository = InMemoryEmployeeRepository::reference();
            info!(
                employees = repository.len(),
                "Using reference employee dataset"
            );
            Ok(repository)
        }
    }
}

/// Builds the salary service described by `config`.
///
/// # Example
///
/// ```
/// use salary_engine::composition::build_salary_service;
/// use salary_engine::config::AppConfig;
///
/// let service = build_salary_service(&AppConfig::default()).unwrap();
/// assert_eq!(service.get_employee_salary(102).unwrap().employee_name, "Priya Patel");
/// ```
pub fn build_salary_service(config: &AppConfig) -> EngineResult<DefaultSalaryService> {
    let employees = build_employee_repository(config)?;
    Ok(SalaryService::new(
        Arc::new(employees),
        Arc::new(StandardSalaryCalculator),
    ))
}

/// Builds a salary service over the reference employees.
pub fn reference_salary_service() -> DefaultSalaryService {
    SalaryService::new(
        Arc::new(InMemoryEmployeeRepository::reference()),
        Arc::new(StandardSalaryCalculator),
    )
}

/// Builds the HTTP API state described by `config`.
pub fn build_app_state(config: &AppConfig) -> EngineResult<AppState> {
    let service = build_salary_service(config)?;
    Ok(AppState::new(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataConfig;
    use crate::error::EngineError;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_serves_reference_employees() {
        let repository = build_employee_repository(&AppConfig::default()).unwrap();
        assert_eq!(repository.employee_numbers(), vec![101, 102, 103, 104, 105]);
    }

    #[test]
    fn test_reference_service_matches_default_build() {
        let built = build_salary_service(&AppConfig::default()).unwrap();
        let reference = reference_salary_service();

        for employee_number in 101..=105 {
            assert_eq!(
                built.get_employee_salary(employee_number).unwrap(),
                reference.get_employee_salary(employee_number).unwrap()
            );
        }
    }

    #[test]
    fn test_reference_service_computes_103() {
        let result = reference_salary_service().get_employee_salary(103).unwrap();
        assert_eq!(result.net_salary, Decimal::new(82000, 0));
    }

    #[test]
    fn test_missing_employees_file_fails_composition() {
        let config = AppConfig {
            data: DataConfig {
                employees_file: Some(PathBuf::from("/definitely/not/here/employees.yaml")),
            },
            ..AppConfig::default()
        };

        assert!(matches!(
            build_salary_service(&config),
            Err(EngineError::ConfigNotFound { .. })
        ));
    }
}
