//! Configuration loading and management for the HR cost engine.
//!
//! This module provides functionality to load payroll defaults and holiday
//! calendars from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use hr_cost::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Insurance rate: {}", config.employer_insurance().rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CostConfig, HolidayCalendarFile, LeaveConfig, PayrollConfig, ServerConfig};
