//! Export of calculation results.
//!
//! An export has two sheets: `RESULT` holds the inputs as key/value rows
//! followed by the monthly cost table, `HOLIDAYS` holds the holiday calendar
//! in a shape [`super::parse_holidays`] reads back. The sheets are produced
//! either as CSV text ([`export_workbook`]) or as an Excel `.xlsx` file
//! ([`export_xlsx`]).

use std::fmt;

use csv::WriterBuilder;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInputs, HolidayEntry, MonthResult};

/// Name of the sheet holding inputs and monthly costs.
pub const RESULT_SHEET: &str = "RESULT";

/// Name of the sheet holding the holiday calendar.
pub const HOLIDAYS_SHEET: &str = "HOLIDAYS";

/// Monthly cost columns in export order: field name and Vietnamese label.
const MONTHLY_COLUMNS: [(&str, &str); 20] = [
    ("year", "Năm"),
    ("month", "Tháng"),
    ("month_start", "Ngày 1 của tháng"),
    ("month_end", "Ngày cuối tháng"),
    ("calc_start", "Bắt đầu tính"),
    ("calc_end", "Kết thúc tính"),
    ("F", "Ngày làm việc chuẩn (F)"),
    ("G", "Ngày nghỉ lễ (G)"),
    ("H", "Ngày công trả lương chuẩn (H)"),
    ("paid_workdays", "Ngày làm việc thực tế"),
    ("paid_holidays", "Ngày lễ thực tế"),
    ("I", "Ngày công trả lương thực tế (I)"),
    ("J", "Phép năm thực tế (J)"),
    ("K", "Lương/ngày (K)"),
    ("L", "Chi phí làm việc (L)"),
    ("M", "Chi phí nghỉ phép (M)"),
    ("N", "Chi phí nghỉ lễ (N)"),
    ("O", "Tổng lương phải trả (O)"),
    ("P", "BH NSDLĐ (P)"),
    ("Q", "TỔNG CHI PHÍ CÔNG TY (Q)"),
];

/// Header labels for the monthly cost table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnLabels {
    /// Vietnamese display labels.
    #[default]
    Vietnamese,
    /// Raw field names (`year`, `month`, `F` ... `Q`).
    Field,
}

impl ColumnLabels {
    fn headers(self) -> Vec<&'static str> {
        MONTHLY_COLUMNS
            .iter()
            .map(|(field, label)| match self {
                ColumnLabels::Vietnamese => *label,
                ColumnLabels::Field => *field,
            })
            .collect()
    }
}

/// One named CSV sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSheet {
    /// The sheet name.
    pub name: String,
    /// The sheet content as CSV text.
    pub csv: String,
}

/// A workbook of CSV sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportWorkbook {
    /// The sheets in workbook order.
    pub sheets: Vec<ExportSheet>,
}

impl ExportWorkbook {
    /// Returns the sheet with the given name.
    pub fn sheet(&self, name: &str) -> Option<&ExportSheet> {
        self.sheets.iter().find(|s| s.name == name)
    }
}

/// Builds the export workbook for a calculated year.
///
/// # Errors
///
/// Returns [`EngineError::ExportError`] if a sheet cannot be written.
///
/// # Example
///
/// ```
/// use hr_cost::adapters::{export_workbook, ColumnLabels, HOLIDAYS_SHEET, RESULT_SHEET};
/// use hr_cost::calculation::CalculationEngine;
/// use hr_cost::models::{CalculationInputs, HolidayEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
/// let inputs = CalculationInputs::new(Decimal::new(20_000_000, 0), d(1, 1), d(12, 31));
/// let holidays = vec![HolidayEntry::new(d(9, 2), "Quốc khánh")];
/// let engine = CalculationEngine::new(inputs.clone(), holidays.clone()).unwrap();
/// let months = engine.calculate_year(2026).unwrap();
///
/// let workbook = export_workbook(&inputs, 2026, &months, &holidays, ColumnLabels::Field).unwrap();
/// assert!(workbook.sheet(RESULT_SHEET).unwrap().csv.starts_with("INPUTS"));
/// assert_eq!(workbook.sheet(HOLIDAYS_SHEET).unwrap().csv, "date,name\n2026-09-02,Quốc khánh\n");
/// ```
pub fn export_workbook(
    inputs: &CalculationInputs,
    year: i32,
    months: &[MonthResult],
    holidays: &[HolidayEntry],
    labels: ColumnLabels,
) -> EngineResult<ExportWorkbook> {
    Ok(ExportWorkbook {
        sheets: vec![
            ExportSheet {
                name: RESULT_SHEET.to_string(),
                csv: result_sheet(inputs, year, months, labels)?,
            },
            ExportSheet {
                name: HOLIDAYS_SHEET.to_string(),
                csv: holidays_sheet(holidays)?,
            },
        ],
    })
}

/// One exported cell. Numbers stay numeric in `.xlsx` sheets.
#[derive(Debug, Clone, PartialEq)]
enum Cell {
    Text(String),
    Count(i64),
    Amount(Decimal),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(text),
            Cell::Count(count) => write!(f, "{}", count),
            Cell::Amount(amount) => write!(f, "{}", amount),
        }
    }
}

fn date_cell(date: chrono::NaiveDate) -> Cell {
    Cell::Text(date.to_string())
}

/// Key/value rows describing the inputs, in export order.
fn input_rows(inputs: &CalculationInputs, year: i32) -> Vec<(&'static str, Cell)> {
    let policy = &inputs.employer_insurance;
    vec![
        ("gross_monthly", Cell::Amount(inputs.gross_monthly)),
        (
            "start_date",
            Cell::Text(inputs.start_date.format("%d/%m/%Y").to_string()),
        ),
        (
            "end_date",
            Cell::Text(inputs.end_date.format("%d/%m/%Y").to_string()),
        ),
        ("year", Cell::Count(i64::from(year))),
        ("annual_leave_days", Cell::Amount(inputs.annual_leave_days)),
        ("insurance_enabled", Cell::Text(policy.enabled.to_string())),
        ("insurance_rate", Cell::Amount(policy.rate)),
        ("insurance_cap", Cell::Amount(policy.cap)),
    ]
}

fn month_row(m: &MonthResult) -> Vec<Cell> {
    vec![
        Cell::Count(i64::from(m.year)),
        Cell::Count(i64::from(m.month)),
        date_cell(m.month_start),
        date_cell(m.month_end),
        date_cell(m.calc_start),
        date_cell(m.calc_end),
        Cell::Count(i64::from(m.standard_workdays)),
        Cell::Count(i64::from(m.standard_holidays)),
        Cell::Count(i64::from(m.standard_paid_days)),
        Cell::Count(i64::from(m.paid_workdays)),
        Cell::Count(i64::from(m.paid_holidays)),
        Cell::Count(i64::from(m.actual_paid_days)),
        Cell::Amount(m.leave_days),
        Cell::Amount(m.daily_rate),
        Cell::Amount(m.work_cost),
        Cell::Amount(m.leave_cost),
        Cell::Amount(m.holiday_cost),
        Cell::Amount(m.total_salary),
        Cell::Amount(m.employer_insurance),
        Cell::Amount(m.total_cost),
    ]
}

fn result_sheet(
    inputs: &CalculationInputs,
    year: i32,
    months: &[MonthResult],
    labels: ColumnLabels,
) -> EngineResult<String> {
    let mut writer = WriterBuilder::new().flexible(true).from_writer(Vec::new());

    writer.write_record(["INPUTS"]).map_err(export_error)?;
    for (key, value) in input_rows(inputs, year) {
        writer
            .write_record([key.to_string(), value.to_string()])
            .map_err(export_error)?;
    }
    writer.write_record([""]).map_err(export_error)?;
    writer.write_record(["MONTHLY_COST"]).map_err(export_error)?;
    writer.write_record(labels.headers()).map_err(export_error)?;
    for month in months {
        writer
            .write_record(month_row(month).iter().map(Cell::to_string))
            .map_err(export_error)?;
    }

    finish(writer)
}

fn holidays_sheet(holidays: &[HolidayEntry]) -> EngineResult<String> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(["date", "name"]).map_err(export_error)?;
    for holiday in holidays {
        writer
            .write_record([holiday.date.to_string(), holiday.name.clone()])
            .map_err(export_error)?;
    }

    finish(writer)
}

/// Builds the export as an Excel `.xlsx` file.
///
/// The file has the same two sheets as [`export_workbook`]. Counts and money
/// are written as numbers; dates are written as text in the CSV layouts.
///
/// # Errors
///
/// Returns [`EngineError::ExportError`] if the workbook cannot be written.
///
/// # Example
///
/// ```
/// use hr_cost::adapters::{export_xlsx, parse_holidays, ColumnLabels};
/// use hr_cost::calculation::CalculationEngine;
/// use hr_cost::models::{CalculationInputs, HolidayEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let d = |m, day| NaiveDate::from_ymd_opt(2026, m, day).unwrap();
/// let inputs = CalculationInputs::new(Decimal::new(20_000_000, 0), d(1, 1), d(12, 31));
/// let holidays = vec![HolidayEntry::new(d(9, 2), "Quốc khánh")];
/// let engine = CalculationEngine::new(inputs.clone(), holidays.clone()).unwrap();
/// let months = engine.calculate_year(2026).unwrap();
///
/// let bytes = export_xlsx(&inputs, 2026, &months, &holidays, ColumnLabels::default()).unwrap();
/// assert_eq!(parse_holidays("export.xlsx", &bytes).unwrap(), holidays);
/// ```
pub fn export_xlsx(
    inputs: &CalculationInputs,
    year: i32,
    months: &[MonthResult],
    holidays: &[HolidayEntry],
    labels: ColumnLabels,
) -> EngineResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let result = workbook.add_worksheet();
    result.set_name(RESULT_SHEET).map_err(xlsx_error)?;
    write_result_worksheet(result, inputs, year, months, labels, &bold).map_err(xlsx_error)?;

    let calendar = workbook.add_worksheet();
    calendar.set_name(HOLIDAYS_SHEET).map_err(xlsx_error)?;
    write_holidays_worksheet(calendar, holidays, &bold).map_err(xlsx_error)?;

    workbook.save_to_buffer().map_err(xlsx_error)
}

fn write_result_worksheet(
    sheet: &mut Worksheet,
    inputs: &CalculationInputs,
    year: i32,
    months: &[MonthResult],
    labels: ColumnLabels,
    bold: &Format,
) -> Result<(), XlsxError> {
    let mut row = 0u32;

    sheet.write_string_with_format(row, 0, "INPUTS", bold)?;
    for (key, value) in input_rows(inputs, year) {
        row += 1;
        sheet.write_string(row, 0, key)?;
        write_cell(sheet, row, 1, &value)?;
    }

    // One blank row between the blocks
    row += 2;
    sheet.write_string_with_format(row, 0, "MONTHLY_COST", bold)?;

    row += 1;
    for (col, label) in (0u16..).zip(labels.headers()) {
        sheet.write_string_with_format(row, col, label, bold)?;
    }

    for month in months {
        row += 1;
        for (col, cell) in (0u16..).zip(month_row(month).iter()) {
            write_cell(sheet, row, col, cell)?;
        }
    }

    Ok(())
}

fn write_holidays_worksheet(
    sheet: &mut Worksheet,
    holidays: &[HolidayEntry],
    bold: &Format,
) -> Result<(), XlsxError> {
    sheet.write_string_with_format(0, 0, "date", bold)?;
    sheet.write_string_with_format(0, 1, "name", bold)?;

    for (row, holiday) in (1u32..).zip(holidays) {
        sheet.write_string(row, 0, holiday.date.to_string())?;
        sheet.write_string(row, 1, holiday.name.as_str())?;
    }

    Ok(())
}

fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<(), XlsxError> {
    match cell {
        Cell::Text(text) => sheet.write_string(row, col, text.as_str())?,
        Cell::Count(count) => sheet.write_number(row, col, *count as f64)?,
        Cell::Amount(amount) => match amount.to_f64() {
            Some(number) => sheet.write_number(row, col, number)?,
            None => sheet.write_string(row, col, amount.to_string())?,
        },
    };
    Ok(())
}

fn xlsx_error(error: XlsxError) -> EngineError {
    EngineError::ExportError {
        message: error.to_string(),
    }
}

fn finish(writer: csv::Writer<Vec<u8>>) -> EngineResult<String> {
    let bytes = writer.into_inner().map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::ExportError {
        message: e.to_string(),
    })
}

fn export_error(error: csv::Error) -> EngineError {
    EngineError::ExportError {
        message: error.to_string(),
    }
}
