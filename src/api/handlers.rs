//! HTTP request handlers for the HR cost API.
//!
//! This module contains the handler functions for all API endpoints and the
//! access key middleware.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Query, Request, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::adapters::{ColumnLabels, export_workbook, export_xlsx, parse_holidays};
use crate::calculation::CalculationEngine;
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInputs, HolidayEntry, MonthResult, YearTotals};

use super::request::{CalculationRequest, HolidayParseQuery, MonthRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, HolidayListResponse};
use super::state::AppState;

/// Header carrying the API access key.
pub const ACCESS_KEY_HEADER: &str = "x-access-key";

/// Media type of an Excel `.xlsx` file.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/month", post(calculate_month_handler))
        .route("/export", post(export_handler))
        .route("/export/xlsx", post(export_xlsx_handler))
        .route("/holidays/parse", post(parse_holidays_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_access_key,
        ))
        .with_state(state)
}

/// Rejects requests that do not present the configured access key.
async fn require_access_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let presented = request
        .headers()
        .get(ACCESS_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if state.allows(presented) {
        next.run(request).await
    } else {
        warn!(uri = %request.uri(), "Request rejected by access gate");
        ApiErrorResponse::new(StatusCode::UNAUTHORIZED, ApiError::unauthorized()).into_response()
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to an API error response.
fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed serde error
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Uses the supplied holidays, or the configured calendar for the year.
///
/// A year without a configured calendar is calculated without holidays.
fn resolve_holidays(
    config: &ConfigLoader,
    year: i32,
    supplied: Option<Vec<HolidayEntry>>,
    correlation_id: Uuid,
) -> Vec<HolidayEntry> {
    if let Some(holidays) = supplied {
        return holidays;
    }

    match config.holidays_for_year(year) {
        Ok(holidays) => holidays.to_vec(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "No holiday calendar configured, calculating without holidays"
            );
            Vec::new()
        }
    }
}

/// Handler for POST /calculate endpoint.
///
/// Calculates the twelve month records of the requested year.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let inputs = request.inputs.resolve(state.config());
    let holidays = resolve_holidays(state.config(), request.year, request.holidays, correlation_id);
    let holidays_used = holidays.len();

    let start_time = Instant::now();
    let result = CalculationEngine::new(inputs, holidays)
        .and_then(|engine| engine.calculate_year(request.year))
        .and_then(|months| YearTotals::from_months(&months).map(|totals| (months, totals)));
    let (months, totals) = match result {
        Ok(calculated) => calculated,
        Err(err) => return error_response(correlation_id, err),
    };
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        holidays_used,
        total_cost = %totals.total_cost,
        duration_us = duration.as_micros(),
        "Calculation completed successfully"
    );

    json_response(
        StatusCode::OK,
        CalculationResponse {
            calculation_id: correlation_id,
            year: request.year,
            months,
            totals,
            holidays_used,
            calculated_at: Utc::now(),
            duration_us: duration.as_micros() as u64,
        },
    )
}

/// Handler for POST /calculate/month endpoint.
async fn calculate_month_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let inputs = request.inputs.resolve(state.config());
    let holidays = resolve_holidays(state.config(), request.year, request.holidays, correlation_id);

    match CalculationEngine::new(inputs, holidays)
        .and_then(|engine| engine.calculate_month(request.year, request.month))
    {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                year = result.year,
                month = result.month,
                total_cost = %result.total_cost,
                "Month calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Calculates the requested year and hands it to an export writer.
fn export_year<T>(
    state: &AppState,
    request: CalculationRequest,
    correlation_id: Uuid,
    write: impl FnOnce(&CalculationInputs, i32, &[MonthResult], &[HolidayEntry], ColumnLabels) -> EngineResult<T>,
) -> EngineResult<T> {
    let inputs = request.inputs.resolve(state.config());
    let holidays = resolve_holidays(state.config(), request.year, request.holidays, correlation_id);

    let engine = CalculationEngine::new(inputs, holidays)?;
    let months = engine.calculate_year(request.year)?;
    write(
        engine.inputs(),
        request.year,
        &months,
        engine.holidays(),
        request.labels,
    )
}

/// Handler for POST /export endpoint.
///
/// Calculates the year and returns the result and holiday sheets as CSV.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match export_year(&state, request, correlation_id, export_workbook) {
        Ok(workbook) => {
            info!(
                correlation_id = %correlation_id,
                sheets = workbook.sheets.len(),
                "Export completed successfully"
            );
            json_response(StatusCode::OK, workbook)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /export/xlsx endpoint.
///
/// Same calculation as `/export`, returned as an Excel attachment.
async fn export_xlsx_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing xlsx export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };
    let file_name = format!("hr_cost_{}.xlsx", request.year);

    match export_year(&state, request, correlation_id, export_xlsx) {
        Ok(bytes) => {
            info!(
                correlation_id = %correlation_id,
                bytes = bytes.len(),
                "Xlsx export completed successfully"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /holidays/parse endpoint.
///
/// Reads an uploaded holiday table from the raw request body.
async fn parse_holidays_handler(
    query: Result<Query<HolidayParseQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection,
                "Invalid holiday parse query"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            );
        }
    };

    info!(
        correlation_id = %correlation_id,
        file_name = %query.file_name,
        bytes = body.len(),
        "Processing holiday source"
    );

    match parse_holidays(&query.file_name, &body) {
        Ok(holidays) => json_response(StatusCode::OK, HolidayListResponse { holidays }),
        Err(err) => error_response(correlation_id, err),
    }
}
