//! Monthly payroll cost engine for a Monday-Saturday work calendar.
//!
//! This crate turns a gross salary, an employment date range, a holiday
//! calendar, a leave policy and an employer insurance policy into a
//! twelve-row annual cost breakdown, and serves it over HTTP.

#![warn(missing_docs)]

pub mod adapters;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
