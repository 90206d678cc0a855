//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration and employee datasets from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::types::{AppConfig, EmployeesFile};

/// Loads and provides access to the application configuration.
///
/// # File Layout
///
/// ```text
/// config/
/// ├── salary-engine.yaml  # Server and data settings
/// └── employees.yaml      # Employee dataset referenced by data.employees_file
/// ```
///
/// A relative `data.employees_file` is resolved against the directory of
/// the configuration file.
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/salary-engine.yaml")?;
/// println!("Binding to {}", loader.config().server.bind_address());
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown keys (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let mut config = Self::load_yaml::<AppConfig>(path)?;

        if let Some(employees_file) = config.data.employees_file.take() {
            let resolved = match path.parent() {
                Some(dir) if employees_file.is_relative() => dir.join(employees_file),
                _ => employees_file,
            };
            config.data.employees_file = Some(resolved);
        }

        debug!(path = %path.display(), "Loaded configuration");
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Loads an employee dataset file.
    ///
    /// Records are returned as written; invariant checks happen when a
    /// store is built from them.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salary_engine::config::ConfigLoader;
    ///
    /// let employees = ConfigLoader::load_employees("./config/employees.yaml")?;
    /// println!("Loaded {} employees", employees.len());
    /// # Ok::<(), salary_engine::error::EngineError>(())
    /// ```
    pub fn load_employees<P: AsRef<Path>>(path: P) -> EngineResult<Vec<Employee>> {
        let file = Self::load_yaml::<EmployeesFile>(path.as_ref())?;
        Ok(file.employees)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
