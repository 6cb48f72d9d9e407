//! Error types for the HR cost engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur around a payroll cost calculation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the HR cost engine.
///
/// All fallible operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hr_cost::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No holiday calendar is configured for the requested year.
    #[error("Holiday calendar not found for year {year}")]
    HolidayCalendarNotFound {
        /// The requested year.
        year: i32,
    },

    /// The employment start date is after the end date.
    #[error("Start date {start} is after end date {end}")]
    InvalidDateRange {
        /// The employment start date.
        start: NaiveDate,
        /// The employment end date.
        end: NaiveDate,
    },

    /// The requested (year, month) pair does not name a calendar month.
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested month number.
        month: u32,
    },

    /// The holiday source has a file type that cannot be read.
    #[error("Unsupported holiday source '{file_name}': only CSV and Excel files are supported")]
    UnsupportedHolidaySource {
        /// The name of the rejected file.
        file_name: String,
    },

    /// The holiday source could not be read.
    #[error("Failed to read holiday source: {message}")]
    HolidaySourceParseError {
        /// A description of the read error.
        message: String,
    },

    /// A money quantity left the representable decimal range.
    #[error("Amount out of range while computing {quantity}")]
    AmountOutOfRange {
        /// The quantity being computed when the range was exceeded.
        quantity: &'static str,
    },

    /// Writing an export sheet failed.
    #[error("Export failed: {message}")]
    ExportError {
        /// A description of the export error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
