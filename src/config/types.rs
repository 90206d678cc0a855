//! Configuration types for the salary engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::Employee;

/// Default address the HTTP API binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port the HTTP API listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// The complete application configuration.
///
/// Every section is optional in the YAML file; missing sections take their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Employee data settings.
    pub data: DataConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// The host or IP address to bind.
    pub host: String,
    /// The TCP port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` string to bind to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Employee data settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// YAML file listing the employees to serve.
    ///
    /// When absent, the built-in reference employees are served.
    pub employees_file: Option<PathBuf>,
}

/// Employees dataset file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// The employee records.
    pub employees: Vec<Employee>,
}
