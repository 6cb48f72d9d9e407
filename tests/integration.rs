//! Integration tests for the HR cost API.
//!
//! This test suite drives the router end to end and covers:
//! - Full year calculation with and without the configured calendar
//! - Months outside the employment range
//! - Employer insurance cap
//! - Holidays falling on Sunday
//! - Mid-month starts
//! - Single month calculation
//! - Payroll defaults taken from the configuration
//! - Export (CSV sheets and xlsx) and holiday table parsing
//! - Access key gate
//! - Error cases, including amounts too large to cost

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use hr_cost::api::{ACCESS_KEY_HEADER, AppState, XLSX_CONTENT_TYPE, create_router};
use hr_cost::config::{ConfigLoader, CostConfig, PayrollConfig};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

fn create_router_from_payroll(payroll: PayrollConfig) -> Router {
    create_router(AppState::new(ConfigLoader::from_config(CostConfig::new(
        payroll,
        vec![],
    ))))
}

fn create_router_with_key(key: &str) -> Router {
    let mut payroll: PayrollConfig = serde_yaml::from_str(
        r#"
leave:
  annual_leave_days: "12"
employer_insurance:
  enabled: true
  rate: "0.215"
  cap: "5500000"
"#,
    )
    .unwrap();
    payroll.access_key = Some(key.to_string());
    create_router_from_payroll(payroll)
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn field(value: &Value, name: &str) -> Decimal {
    decimal(value[name].as_str().unwrap_or_else(|| panic!("{} is not a string", name)))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn post_json_for_bytes(
    router: Router,
    uri: &str,
    body: Value,
) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, bytes.to_vec())
}

async fn post_raw(router: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(body.into())
            .unwrap(),
    )
    .await
}

fn create_inputs(gross: &str, start: &str, end: &str) -> Value {
    json!({
        "gross_monthly": gross,
        "start_date": start,
        "end_date": end
    })
}

fn create_holiday(date: &str, name: &str) -> Value {
    json!({ "date": date, "name": name })
}

fn month(body: &Value, month: usize) -> &Value {
    &body["months"][month - 1]
}

// =============================================================================
// SECTION 1: Full Year Calculation
// =============================================================================

#[tokio::test]
async fn test_full_year_employee_january_without_holidays() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026,
            "holidays": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2026);
    assert_eq!(body["months"].as_array().unwrap().len(), 12);

    let january = month(&body, 1);
    assert_eq!(january["active"], true);
    assert_eq!(january["standard_workdays"], 27);
    assert_eq!(january["standard_holidays"], 0);
    assert_eq!(january["standard_paid_days"], 27);
    assert_eq!(january["actual_paid_days"], 27);
    assert_eq!(field(january, "leave_ratio"), Decimal::ONE);
    assert_eq!(field(january, "leave_days"), Decimal::ONE);
    assert_eq!(field(january, "total_salary").round_dp(2), decimal("20000000"));
    assert_eq!(field(january, "holiday_cost"), Decimal::ZERO);
}

#[tokio::test]
async fn test_months_are_returned_in_calendar_order() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    for (index, record) in body["months"].as_array().unwrap().iter().enumerate() {
        assert_eq!(record["year"], 2026);
        assert_eq!(record["month"], index as u64 + 1);
    }
    assert_eq!(month(&body, 2)["month_end"], "2026-02-28");
}

#[tokio::test]
async fn test_configured_calendar_used_when_holidays_absent() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["holidays_used"].as_u64().unwrap() > 0);

    // 2026-01-01 is a Thursday
    let january = month(&body, 1);
    assert_eq!(january["standard_workdays"], 26);
    assert_eq!(january["standard_holidays"], 1);
    assert_eq!(january["standard_paid_days"], 27);
}

#[tokio::test]
async fn test_year_without_configured_calendar_calculates_without_holidays() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate",
        json!({
            "inputs": create_inputs("20000000", "2030-01-01", "2030-12-31"),
            "year": 2030
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["holidays_used"], 0);
    for record in body["months"].as_array().unwrap() {
        assert_eq!(record["standard_holidays"], 0);
    }
}

#[tokio::test]
async fn test_totals_sum_the_months() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate",
        json!({
            "inputs": create_inputs("20000000", "2026-04-15", "2026-12-31"),
            "year": 2026
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let months = body["months"].as_array().unwrap();
    let total_cost: Decimal = months.iter().map(|m| field(m, "total_cost")).sum();
    let insurance: Decimal = months.iter().map(|m| field(m, "employer_insurance")).sum();

    assert_eq!(field(&body["totals"], "total_cost"), total_cost);
    assert_eq!(field(&body["totals"], "employer_insurance"), insurance);
}

// =============================================================================
// SECTION 2: Months Outside Employment
// =============================================================================

#[tokio::test]
async fn test_february_only_employee_has_zero_january() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate",
        json!({
            "inputs": create_inputs("20000000", "2026-02-01", "2026-02-28"),
            "year": 2026,
            "holidays": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    let january = month(&body, 1);
    assert_eq!(january["active"], false);
    assert_eq!(january["standard_workdays"], 27);
    assert_eq!(january["actual_paid_days"], 0);
    assert_eq!(field(january, "leave_days"), Decimal::ZERO);
    assert_eq!(field(january, "total_salary"), Decimal::ZERO);
    assert_eq!(field(january, "employer_insurance"), Decimal::ZERO);
    assert_eq!(field(january, "total_cost"), Decimal::ZERO);

    let february = month(&body, 2);
    assert_eq!(february["active"], true);
    assert!(field(february, "total_cost") > Decimal::ZERO);

    let march = month(&body, 3);
    assert_eq!(march["active"], false);
    assert_eq!(field(march, "total_cost"), Decimal::ZERO);
}

// =============================================================================
// SECTION 3: Employer Insurance
// =============================================================================

#[tokio::test]
async fn test_insurance_base_is_capped() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate/month",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026,
            "month": 1,
            "holidays": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 5,500,000 x 21.5%
    assert_eq!(field(&body, "employer_insurance"), decimal("1182500"));
}

#[tokio::test]
async fn test_insurance_below_cap_and_exact_month_values() {
    // September 2026 with two holidays has 26 standard paid days
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate/month",
        json!({
            "inputs": create_inputs("2600000", "2026-01-01", "2026-12-31"),
            "year": 2026,
            "month": 9,
            "holidays": [
                create_holiday("2026-09-01", "Quốc khánh (nghỉ thêm)"),
                create_holiday("2026-09-02", "Quốc khánh")
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["standard_workdays"], 24);
    assert_eq!(body["standard_holidays"], 2);
    assert_eq!(body["standard_paid_days"], 26);
    assert_eq!(body["actual_paid_days"], 26);
    assert_eq!(field(&body, "daily_rate"), decimal("100000"));
    assert_eq!(field(&body, "leave_days"), Decimal::ONE);
    assert_eq!(field(&body, "work_cost"), decimal("2300000"));
    assert_eq!(field(&body, "leave_cost"), decimal("100000"));
    assert_eq!(field(&body, "holiday_cost"), decimal("200000"));
    assert_eq!(field(&body, "total_salary"), decimal("2600000"));
    assert_eq!(field(&body, "employer_insurance"), decimal("559000"));
    // Leave and holiday cost are counted again on top of the salary total
    assert_eq!(field(&body, "total_cost"), decimal("3459000"));
}

#[tokio::test]
async fn test_insurance_disabled() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate/month",
        json!({
            "inputs": {
                "gross_monthly": "20000000",
                "start_date": "2026-01-01",
                "end_date": "2026-12-31",
                "employer_insurance": { "enabled": false, "rate": "0.215", "cap": "5500000" }
            },
            "year": 2026,
            "month": 1,
            "holidays": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "employer_insurance"), Decimal::ZERO);
}

// =============================================================================
// SECTION 4: Holidays
// =============================================================================

#[tokio::test]
async fn test_sunday_holiday_is_ignored() {
    // 2026-04-26 is a Sunday
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate/month",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026,
            "month": 4,
            "holidays": [create_holiday("2026-04-26", "Giỗ Tổ Hùng Vương")]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["standard_workdays"], 26);
    assert_eq!(body["standard_holidays"], 0);
    assert_eq!(body["standard_paid_days"], 26);
    assert_eq!(field(&body, "holiday_cost"), Decimal::ZERO);
}

#[tokio::test]
async fn test_saturday_holiday_is_paid() {
    // 2026-01-03 is a Saturday
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate/month",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026,
            "month": 1,
            "holidays": [create_holiday("2026-01-03", "")]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["standard_workdays"], 26);
    assert_eq!(body["standard_holidays"], 1);
    assert_eq!(body["paid_holidays"], 1);
}

// =============================================================================
// SECTION 5: Partial Months
// =============================================================================

#[tokio::test]
async fn test_mid_month_start_prorates() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate/month",
        json!({
            "inputs": create_inputs("20000000", "2026-04-15", "2026-12-31"),
            "year": 2026,
            "month": 4,
            "holidays": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calc_start"], "2026-04-15");
    assert_eq!(body["calc_end"], "2026-04-30");
    assert_eq!(body["standard_workdays"], 26);
    assert_eq!(body["actual_paid_days"], 14);
    assert_eq!(field(&body, "leave_ratio"), decimal("14") / decimal("26"));
    assert!(field(&body, "leave_days") < Decimal::ONE);
    assert_eq!(
        field(&body, "total_salary"),
        Decimal::from(14) * field(&body, "daily_rate")
    );
}

#[tokio::test]
async fn test_mid_month_end_prorates() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/calculate/month",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-06-10"),
            "year": 2026,
            "month": 6,
            "holidays": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calc_start"], "2026-06-01");
    assert_eq!(body["calc_end"], "2026-06-10");
    // 2026-06-07 is the only Sunday in range
    assert_eq!(body["actual_paid_days"], 9);
}

// =============================================================================
// SECTION 6: Export and Holiday Tables
// =============================================================================

#[tokio::test]
async fn test_export_returns_result_and_holiday_sheets() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/export",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let sheets = body["sheets"].as_array().unwrap();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0]["name"], "RESULT");
    assert_eq!(sheets[1]["name"], "HOLIDAYS");

    let result = sheets[0]["csv"].as_str().unwrap();
    assert!(result.contains("INPUTS"));
    assert!(result.contains("MONTHLY_COST"));
    assert!(result.contains("01/01/2026"));

    let holidays = sheets[1]["csv"].as_str().unwrap();
    assert!(holidays.starts_with("date,name"));
    assert!(holidays.contains("2026-09-02"));
}

#[tokio::test]
async fn test_export_with_field_labels() {
    let router = create_router_for_test();
    let (status, body) = post_json(
        router,
        "/export",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026,
            "holidays": [],
            "labels": "field"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let result = body["sheets"][0]["csv"].as_str().unwrap();
    assert!(result.contains("year,month,month_start,month_end,calc_start,calc_end,F,G,H"));
    assert!(!result.contains("TỔNG CHI PHÍ CÔNG TY (Q)"));
}

#[tokio::test]
async fn test_exported_holidays_parse_back() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/export",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026,
            "holidays": [
                create_holiday("2026-04-30", "Giải phóng miền Nam"),
                create_holiday("2026-01-01", "Tết Dương lịch")
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let holiday_csv = body["sheets"][1]["csv"].as_str().unwrap().to_string();

    let (status, parsed) = post_raw(
        create_router_for_test(),
        "/holidays/parse?file_name=HOLIDAYS.csv",
        holiday_csv,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let holidays = parsed["holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 2);
    assert_eq!(holidays[0]["date"], "2026-01-01");
    assert_eq!(holidays[1]["date"], "2026-04-30");
    assert_eq!(holidays[1]["name"], "Giải phóng miền Nam");
}

#[tokio::test]
async fn test_parse_day_first_holiday_table() {
    let table = "Ngày,Tên ngày lễ\n02/09/2026,Quốc khánh\n01/05/2026,Quốc tế Lao động\nnot a date,x\n";
    let (status, body) = post_raw(
        create_router_for_test(),
        "/holidays/parse?file_name=holidays.csv",
        table,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let holidays = body["holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 2);
    assert_eq!(holidays[0]["date"], "2026-05-01");
    assert_eq!(holidays[1]["date"], "2026-09-02");
}

#[tokio::test]
async fn test_xlsx_export_is_a_workbook_attachment() {
    let (status, content_type, bytes) = post_json_for_bytes(
        create_router_for_test(),
        "/export/xlsx",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026,
            "holidays": [create_holiday("2026-09-02", "Quốc khánh")]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some(XLSX_CONTENT_TYPE));
    // Zip container magic
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn test_xlsx_export_holidays_parse_back() {
    let (status, _, bytes) = post_json_for_bytes(
        create_router_for_test(),
        "/export/xlsx",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026,
            "holidays": [
                create_holiday("2026-09-02", "Quốc khánh"),
                create_holiday("2026-01-01", "Tết Dương lịch")
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, parsed) = post_raw(
        create_router_for_test(),
        "/holidays/parse?file_name=hr_cost_2026.xlsx",
        bytes,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let holidays = parsed["holidays"].as_array().unwrap();
    assert_eq!(holidays.len(), 2);
    assert_eq!(holidays[0]["date"], "2026-01-01");
    assert_eq!(holidays[0]["name"], "Tết Dương lịch");
    assert_eq!(holidays[1]["date"], "2026-09-02");
    assert_eq!(holidays[1]["name"], "Quốc khánh");
}

#[tokio::test]
async fn test_unknown_upload_type_is_unsupported() {
    let (status, body) = post_raw(
        create_router_for_test(),
        "/holidays/parse?file_name=holidays.pdf",
        "%PDF-1.7",
    )
    .await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["code"], "UNSUPPORTED_HOLIDAY_SOURCE");
}

#[tokio::test]
async fn test_corrupt_workbook_upload_is_parse_error() {
    let (status, body) = post_raw(
        create_router_for_test(),
        "/holidays/parse?file_name=holidays.xlsx",
        vec![0x50_u8, 0x4b, 0x03, 0x04],
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "HOLIDAY_SOURCE_PARSE_ERROR");
}

#[tokio::test]
async fn test_parse_prefers_exact_name_column() {
    let (status, body) = post_raw(
        create_router_for_test(),
        "/holidays/parse?file_name=holidays.csv",
        "Tên,date,name\nignored,2026-05-01,Quốc tế Lao động\n",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["holidays"][0]["date"], "2026-05-01");
    assert_eq!(body["holidays"][0]["name"], "Quốc tế Lao động");
}

#[tokio::test]
async fn test_parse_without_file_name_is_validation_error() {
    let (status, body) = post_raw(create_router_for_test(), "/holidays/parse", "date\n").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// SECTION 7: Configured Payroll Defaults
// =============================================================================

#[tokio::test]
async fn test_omitted_inputs_use_configured_leave_and_insurance() {
    let payroll: PayrollConfig = serde_yaml::from_str(
        r#"
leave:
  annual_leave_days: "24"
employer_insurance:
  enabled: false
  rate: "0.215"
  cap: "5500000"
"#,
    )
    .unwrap();

    let (status, body) = post_json(
        create_router_from_payroll(payroll),
        "/calculate",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026,
            "holidays": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let january = month(&body, 1);
    assert_eq!(field(january, "monthly_accrual"), decimal("2"));
    assert_eq!(field(january, "employer_insurance"), Decimal::ZERO);
    assert_eq!(field(&body["totals"], "employer_insurance"), Decimal::ZERO);
}

#[tokio::test]
async fn test_supplied_inputs_override_configured_defaults() {
    let payroll: PayrollConfig = serde_yaml::from_str(
        r#"
leave:
  annual_leave_days: "24"
employer_insurance:
  enabled: false
  rate: "0.215"
  cap: "5500000"
"#,
    )
    .unwrap();

    let (status, body) = post_json(
        create_router_from_payroll(payroll),
        "/calculate/month",
        json!({
            "inputs": {
                "gross_monthly": "20000000",
                "start_date": "2026-01-01",
                "end_date": "2026-12-31",
                "annual_leave_days": "12",
                "employer_insurance": { "enabled": true, "rate": "0.215", "cap": "5500000" }
            },
            "year": 2026,
            "month": 1,
            "holidays": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body, "monthly_accrual"), decimal("1"));
    assert_eq!(field(&body, "employer_insurance"), decimal("1182500"));
}

// =============================================================================
// SECTION 8: Access Key
// =============================================================================

#[tokio::test]
async fn test_request_without_key_is_rejected() {
    let (status, body) = post_json(
        create_router_with_key("s3cret"),
        "/calculate",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_request_with_key_is_accepted() {
    let body = json!({
        "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
        "year": 2026
    });
    let (status, _) = send(
        create_router_with_key("s3cret"),
        Request::builder()
            .method("POST")
            .uri("/calculate")
            .header("Content-Type", "application/json")
            .header(ACCESS_KEY_HEADER, "s3cret")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// SECTION 9: Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/calculate")
                .header("Content-Type", "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_year_is_validation_error() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate",
        json!({ "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31") }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_reversed_dates_rejected() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate",
        json!({
            "inputs": create_inputs("20000000", "2026-12-31", "2026-01-01"),
            "year": 2026
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn test_month_thirteen_rejected() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate/month",
        json!({
            "inputs": create_inputs("20000000", "2026-01-01", "2026-12-31"),
            "year": 2026,
            "month": 13
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_MONTH");
}

#[tokio::test]
async fn test_zero_gross_yields_zero_costs() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate",
        json!({
            "inputs": create_inputs("0", "2026-01-01", "2026-12-31"),
            "year": 2026
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(field(&body["totals"], "total_cost"), Decimal::ZERO);
}

#[tokio::test]
async fn test_gross_too_large_to_cost_is_rejected() {
    let (status, body) = post_json(
        create_router_for_test(),
        "/calculate",
        json!({
            "inputs": {
                "gross_monthly": "79228162514264337593543950335",
                "start_date": "2026-01-01",
                "end_date": "2026-12-31",
                "employer_insurance": { "enabled": true, "rate": "0.215", "cap": "0" }
            },
            "year": 2026,
            "holidays": []
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "AMOUNT_OUT_OF_RANGE");
}
