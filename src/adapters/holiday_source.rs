//! Holiday source parsing.
//!
//! This module turns an uploaded holiday table into a list of
//! [`HolidayEntry`] values. CSV files are read with `csv`, Excel workbooks
//! with `calamine`. Column names are matched loosely (English and Vietnamese
//! headers are accepted) and dates are read day-first. Rows whose date cannot
//! be read are dropped; duplicate dates are kept as-is.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, DataType, Reader, open_workbook_auto_from_rs};
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::HolidayEntry;

use super::export::HOLIDAYS_SHEET;

/// Header names recognised as the date column, compared trimmed and lowercased.
pub const DATE_COLUMN_NAMES: &[&str] = &["date", "ngày", "ngay", "holiday_date", "ngày nghỉ"];

/// Header names recognised as the name column, compared trimmed and lowercased.
///
/// A column headed exactly `name` wins over any other match.
pub const NAME_COLUMN_NAMES: &[&str] = &["name", "tên", "ten", "holiday_name", "tên ngày lễ"];

/// Accepted date layouts, day-first before ISO.
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y-%m-%d", "%Y/%m/%d"];

/// Parses a holiday table from an uploaded file.
///
/// The file type is chosen by extension: `.csv` is read as CSV, `.xlsx` and
/// `.xls` as an Excel workbook. A workbook is read from its `HOLIDAYS` sheet
/// when it has one, otherwise from its first sheet.
///
/// # Errors
///
/// - [`EngineError::UnsupportedHolidaySource`] for any other extension
/// - [`EngineError::HolidaySourceParseError`] if the file structure is unreadable
///
/// # Example
///
/// ```
/// use hr_cost::adapters::parse_holidays;
///
/// let csv = "Ngày,Tên\n01/01/2026,Tết Dương lịch\nnot a date,ignored\n";
/// let holidays = parse_holidays("holidays.csv", csv.as_bytes()).unwrap();
/// assert_eq!(holidays.len(), 1);
/// assert_eq!(holidays[0].name, "Tết Dương lịch");
///
/// assert!(parse_holidays("holidays.pdf", b"").is_err());
/// ```
pub fn parse_holidays(file_name: &str, content: &[u8]) -> EngineResult<Vec<HolidayEntry>> {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let (headers, rows) = match extension.as_deref() {
        Some("csv") => read_csv_table(content)?,
        Some("xlsx") | Some("xls") => read_workbook_table(content)?,
        _ => {
            return Err(EngineError::UnsupportedHolidaySource {
                file_name: file_name.to_string(),
            });
        }
    };

    Ok(collect_holidays(&headers, rows))
}

type Table = (Vec<String>, Vec<Vec<String>>);

fn parse_error(error: impl std::fmt::Display) -> EngineError {
    EngineError::HolidaySourceParseError {
        message: error.to_string(),
    }
}

fn read_csv_table(content: &[u8]) -> EngineResult<Table> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content);

    let headers = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let rows = reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect())
                .map_err(parse_error)
        })
        .collect::<EngineResult<Vec<Vec<String>>>>()?;

    Ok((headers, rows))
}

fn read_workbook_table(content: &[u8]) -> EngineResult<Table> {
    let mut workbook =
        open_workbook_auto_from_rs(Cursor::new(content.to_vec())).map_err(parse_error)?;

    let sheet_index = workbook
        .sheet_names()
        .iter()
        .position(|name| name.eq_ignore_ascii_case(HOLIDAYS_SHEET))
        .unwrap_or(0);

    let range = match workbook.worksheet_range_at(sheet_index) {
        Some(range) => range.map_err(parse_error)?,
        None => return Ok((Vec::new(), Vec::new())),
    };

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
    let headers = rows.next().unwrap_or_default();

    Ok((headers, rows.collect()))
}

/// Renders a spreadsheet cell as text; date cells become ISO dates.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.trim().to_string(),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        other => other.to_string(),
    }
}

/// Picks the date and name columns and reads one holiday per readable row.
///
/// The date column is the first header in [`DATE_COLUMN_NAMES`], or the first
/// column if none matches. The name column is the header `name` if present,
/// else the first header in [`NAME_COLUMN_NAMES`]; without one, names are
/// empty. The result is sorted by date.
fn collect_holidays(headers: &[String], rows: Vec<Vec<String>>) -> Vec<HolidayEntry> {
    let date_column = find_column(headers, DATE_COLUMN_NAMES).unwrap_or(0);
    let name_column = headers
        .iter()
        .position(|header| header.trim() == "name")
        .or_else(|| find_column(headers, NAME_COLUMN_NAMES));

    let mut holidays = Vec::new();
    let mut dropped = 0usize;

    for row in &rows {
        match row.get(date_column).and_then(|raw| parse_holiday_date(raw)) {
            Some(date) => {
                let name = name_column
                    .and_then(|column| row.get(column))
                    .map(String::as_str)
                    .unwrap_or_default();
                holidays.push(HolidayEntry::new(date, name));
            }
            None => dropped += 1,
        }
    }

    holidays.sort_by_key(|h| h.date);

    debug!(
        parsed = holidays.len(),
        dropped,
        date_column,
        "Holiday source parsed"
    );

    holidays
}

fn find_column(headers: &[String], names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| names.contains(&header.trim().to_lowercase().as_str()))
}

/// Reads a holiday date, day-first.
///
/// A trailing time component (`2026-01-01 00:00:00`, `2026-01-01T00:00:00`)
/// is ignored. Returns `None` for anything unreadable.
///
/// # Example
///
/// ```
/// use hr_cost::adapters::parse_holiday_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2026, 4, 30);
/// assert_eq!(parse_holiday_date("30/04/2026"), expected);
/// assert_eq!(parse_holiday_date("2026-04-30"), expected);
/// assert_eq!(parse_holiday_date("2026-04-30 00:00:00"), expected);
/// assert_eq!(parse_holiday_date(""), None);
/// ```
pub fn parse_holiday_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let date_part = raw.split([' ', 'T']).next().unwrap_or(raw);

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}
