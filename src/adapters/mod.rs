//! Adapters between the engine and the outside world.
//!
//! Holiday tables come in through [`parse_holidays`]; results go out through
//! [`export_workbook`] (CSV sheets) or [`export_xlsx`] (an Excel file).
//! Neither adapter performs any cost arithmetic.

mod export;
mod holiday_source;

pub use export::{
    ColumnLabels, ExportSheet, ExportWorkbook, HOLIDAYS_SHEET, RESULT_SHEET, export_workbook,
    export_xlsx,
};
pub use holiday_source::{DATE_COLUMN_NAMES, NAME_COLUMN_NAMES, parse_holiday_date, parse_holidays};
