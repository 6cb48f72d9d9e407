//! Response types for the HR cost API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{HolidayEntry, MonthResult, YearTotals};

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// The calculated year.
    pub year: i32,
    /// The twelve month records, January first.
    pub months: Vec<MonthResult>,
    /// Money totals over the year.
    pub totals: YearTotals,
    /// Number of holiday entries the calculation used.
    pub holidays_used: usize,
    /// When the calculation was performed.
    pub calculated_at: DateTime<Utc>,
    /// Calculation duration in microseconds.
    pub duration_us: u64,
}

/// Response body for the `/holidays/parse` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayListResponse {
    /// The parsed holidays, sorted by date.
    pub holidays: Vec<HolidayEntry>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unauthorized error response.
    pub fn unauthorized() -> Self {
        Self::new("UNAUTHORIZED", "A valid x-access-key header is required")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates an error response with the given status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
            EngineError::HolidayCalendarNotFound { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("HOLIDAY_CALENDAR_NOT_FOUND", message),
            ),
            EngineError::InvalidDateRange { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    message,
                    "The employment start date must not be after the end date",
                ),
            ),
            EngineError::InvalidMonth { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details("INVALID_MONTH", message, "Months are numbered 1 to 12"),
            ),
            EngineError::UnsupportedHolidaySource { .. } => ApiErrorResponse::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ApiError::new("UNSUPPORTED_HOLIDAY_SOURCE", message),
            ),
            EngineError::HolidaySourceParseError { .. } => ApiErrorResponse::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("HOLIDAY_SOURCE_PARSE_ERROR", message),
            ),
            EngineError::AmountOutOfRange { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "AMOUNT_OUT_OF_RANGE",
                    message,
                    "The gross salary, leave days or insurance policy is too large to cost",
                ),
            ),
            EngineError::ExportError { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            ),
        }
    }
}
