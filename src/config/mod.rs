//! Configuration loading for the Salary Engine.
//!
//! This module provides functionality to load the application configuration
//! and employee datasets from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/salary-engine.yaml").unwrap();
//! println!("Serving on {}", loader.config().server.bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DEFAULT_HOST, DEFAULT_PORT, DataConfig, EmployeesFile, ServerConfig};
