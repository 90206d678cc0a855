//! Salary Engine
//!
//! This crate resolves an employee's compensation record through a pluggable
//! store, derives their net salary through a pluggable calculator, and
//! returns a presentation-ready result. The [`service::SalaryService`]
//! depends only on the [`repository::EmployeeRepository`] and
//! [`calculation::SalaryCalculator`] traits; [`composition`] wires concrete
//! implementations together.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod cli;
pub mod composition;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;
