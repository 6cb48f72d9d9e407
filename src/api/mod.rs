//! HTTP API module for the HR cost engine.
//!
//! This module provides the REST API endpoints for calculating monthly
//! payroll cost, exporting results and reading holiday tables.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ACCESS_KEY_HEADER, XLSX_CONTENT_TYPE, create_router};
pub use request::{CalculationRequest, HolidayParseQuery, MonthRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, HolidayListResponse};
pub use state::AppState;
