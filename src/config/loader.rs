//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInputs, EmployerInsurancePolicy, HolidayEntry};

use super::types::{CostConfig, HolidayCalendarFile, PayrollConfig, ServerConfig};

/// Loads and provides access to payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query defaults and holiday calendars.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── payroll.yaml      # Leave and insurance defaults, server settings
/// └── holidays/
///     └── 2026.yaml     # Holiday calendar for one year
/// ```
///
/// The `holidays` directory is optional.
///
/// # Example
///
/// ```no_run
/// use hr_cost::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let holidays = loader.holidays_for_year(2026).unwrap();
/// println!("{} holidays configured for 2026", holidays.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CostConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `payroll.yaml` is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let payroll_path = path.join("payroll.yaml");
        let payroll = Self::load_yaml::<PayrollConfig>(&payroll_path)?;

        let holidays_dir = path.join("holidays");
        let calendars = Self::load_calendars(&holidays_dir)?;

        Ok(Self {
            config: CostConfig::new(payroll, calendars),
        })
    }

    /// Creates a loader from already-built configuration.
    pub fn from_config(config: CostConfig) -> Self {
        Self { config }
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

    /// Loads all holiday calendar files from the holidays directory.
    fn load_calendars(holidays_dir: &Path) -> EngineResult<Vec<HolidayCalendarFile>> {
        if !holidays_dir.exists() {
            return Ok(Vec::new());
        }

        let holidays_dir_str = holidays_dir.display().to_string();
        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        paths
            .iter()
            .map(|path| Self::load_yaml::<HolidayCalendarFile>(path))
            .collect()
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CostConfig {
        &self.config
    }

    /// Returns the payroll defaults.
    pub fn payroll(&self) -> &PayrollConfig {
        self.config.payroll()
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.payroll().server
    }

    /// Returns the configured API access key, if any.
    pub fn access_key(&self) -> Option<&str> {
        self.config.payroll().access_key.as_deref()
    }

    /// Returns the default employer insurance policy.
    pub fn employer_insurance(&self) -> &EmployerInsurancePolicy {
        &self.config.payroll().employer_insurance
    }

    /// Returns the years that have a holiday calendar.
    pub fn calendar_years(&self) -> Vec<i32> {
        self.config.calendars().keys().copied().collect()
    }

    /// Gets the holiday calendar for a year.
    ///
    /// # Returns
    ///
    /// Returns the holidays sorted by date, or `HolidayCalendarNotFound` if
    /// no calendar file covers the year.
    pub fn holidays_for_year(&self, year: i32) -> EngineResult<&[HolidayEntry]> {
        self.config
            .calendars()
            .get(&year)
            .map(Vec::as_slice)
            .ok_or(EngineError::HolidayCalendarNotFound { year })
    }

    /// Builds calculation inputs from the configured leave and insurance defaults.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hr_cost::config::ConfigLoader;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let inputs = loader.default_inputs(
    ///     Decimal::new(20_000_000, 0),
    ///     NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
    /// );
    /// println!("Leave days: {}", inputs.annual_leave_days);
    /// # Ok::<(), hr_cost::error::EngineError>(())
    /// ```
    pub fn default_inputs(
        &self,
        gross_monthly: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> CalculationInputs {
        let payroll = self.config.payroll();
        CalculationInputs {
            gross_monthly,
            start_date,
            end_date,
            annual_leave_days: payroll.leave.annual_leave_days,
            employer_insurance: payroll.employer_insurance.clone(),
        }
    }
}
