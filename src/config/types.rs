//! Configuration types for payroll cost calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{EmployerInsurancePolicy, HolidayEntry};

/// Default leave policy.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveConfig {
    /// Annual leave entitlement in days.
    pub annual_leave_days: Decimal,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The address to bind to.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Contents of `payroll.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Default leave policy for new calculations.
    pub leave: LeaveConfig,
    /// Default employer insurance policy for new calculations.
    pub employer_insurance: EmployerInsurancePolicy,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Key every API request must present, if set.
    #[serde(default)]
    pub access_key: Option<String>,
}

/// Contents of one `holidays/<year>.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendarFile {
    /// The year the calendar covers.
    pub year: i32,
    /// The holidays of the year.
    pub holidays: Vec<HolidayEntry>,
}

/// The complete configuration loaded from a configuration directory.
#[derive(Debug, Clone)]
pub struct CostConfig {
    /// Payroll defaults.
    payroll: PayrollConfig,
    /// Holiday calendars by year.
    calendars: BTreeMap<i32, Vec<HolidayEntry>>,
}

impl CostConfig {
    /// Creates a new CostConfig from its component parts.
    ///
    /// Calendar files for the same year are merged in the order given.
    pub fn new(payroll: PayrollConfig, calendars: Vec<HolidayCalendarFile>) -> Self {
        let mut by_year: BTreeMap<i32, Vec<HolidayEntry>> = BTreeMap::new();
        for calendar in calendars {
            by_year
                .entry(calendar.year)
                .or_default()
                .extend(calendar.holidays);
        }
        for holidays in by_year.values_mut() {
            holidays.sort_by_key(|h| h.date);
        }

        Self {
            payroll,
            calendars: by_year,
        }
    }

    /// Returns the payroll defaults.
    pub fn payroll(&self) -> &PayrollConfig {
        &self.payroll
    }

    /// Returns the holiday calendars by year.
    pub fn calendars(&self) -> &BTreeMap<i32, Vec<HolidayEntry>> {
        &self.calendars
    }
}
