//! Spreadsheet extraction using `calamine`.
//!
//! The workbook format (xlsx, xlsm, xlsb, xls, ods) is sniffed from the bytes.
//! Each worksheet's used range becomes a list of records: the first row holds
//! the headers and every later row maps header → cell value.
//!
//! # Example
//!
//! ```rust,no_run
//! use docjson::extraction::excel::{SpreadsheetOptions, extract_spreadsheet};
//!
//! # fn example(bytes: &[u8]) -> docjson::Result<()> {
//! let options = SpreadsheetOptions {
//!     separate_sheets: true,
//!     ..Default::default()
//! };
//! let result = extract_spreadsheet(bytes, &options)?;
//! println!("{} sheets", result.len());
//! # Ok(())
//! # }
//! ```

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use serde_json::{Number, Value};
use std::io::Cursor;

use crate::core::config::ConversionConfig;
use crate::error::{DocjsonError, Result};
use crate::types::{ExtractionResult, Record, SheetResult};

pub const ROW_NUMBER_KEY: &str = "row_number";
pub const SHEET_NAME_KEY: &str = "sheet_name";
pub const ROWS_KEY: &str = "rows";
pub const SHEETS_KEY: &str = "sheets";

/// Key used for a header cell that is empty.
const EMPTY_HEADER: &str = "__EMPTY";

/// Largest float that still maps exactly onto an integer JSON number.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Shaping options for spreadsheet output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpreadsheetOptions {
    pub include_sheet_name: bool,
    pub include_row_numbers: bool,
    pub separate_sheets: bool,
}

impl Default for SpreadsheetOptions {
    fn default() -> Self {
        Self {
            include_sheet_name: true,
            include_row_numbers: false,
            separate_sheets: false,
        }
    }
}

impl From<&ConversionConfig> for SpreadsheetOptions {
    fn from(config: &ConversionConfig) -> Self {
        Self {
            include_sheet_name: config.include_sheet_name,
            include_row_numbers: config.include_row_numbers,
            separate_sheets: config.separate_sheets,
        }
    }
}

/// Read every worksheet, in workbook order.
///
/// Sheets whose range cannot be read (chart sheets, for instance) are skipped.
///
/// # Errors
///
/// Returns `DocjsonError::ExtractionFailed` if the bytes are not a readable workbook.
pub fn read_sheets(bytes: &[u8], include_row_numbers: bool) -> Result<Vec<SheetResult>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| DocjsonError::extraction_failed_with_source(format!("Failed to open workbook: {}", e), e))?;

    let sheet_names = workbook.sheet_names();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        match workbook.worksheet_range(&name) {
            Ok(range) => {
                let rows = sheet_rows(&range, include_row_numbers);
                sheets.push(SheetResult { sheet_name: name, rows });
            }
            Err(e) => tracing::warn!(sheet = %name, "Skipping unreadable worksheet: {}", e),
        }
    }

    Ok(sheets)
}

/// Extract a workbook and shape it according to `options`.
///
/// - `separate_sheets`: one record per sheet, `{sheet_name?, rows}`
/// - otherwise, with sheet names: `{sheets: [{sheet_name, rows}, ...]}`
/// - otherwise: `{sheets: [row, ...]}` with the rows of all sheets concatenated
pub fn extract_spreadsheet(bytes: &[u8], options: &SpreadsheetOptions) -> Result<ExtractionResult> {
    let sheets = read_sheets(bytes, options.include_row_numbers)?;
    Ok(shape_sheets(sheets, options))
}

pub fn shape_sheets(sheets: Vec<SheetResult>, options: &SpreadsheetOptions) -> ExtractionResult {
    if options.separate_sheets {
        let records = sheets
            .into_iter()
            .map(|sheet| sheet_record(sheet, options.include_sheet_name))
            .collect();
        return ExtractionResult::Many(records);
    }

    let entries: Vec<Value> = if options.include_sheet_name {
        sheets
            .into_iter()
            .map(|sheet| Value::Object(sheet_record(sheet, true)))
            .collect()
    } else {
        sheets
            .into_iter()
            .flat_map(|sheet| sheet.rows)
            .map(Value::Object)
            .collect()
    };

    let mut record = Record::new();
    record.insert(SHEETS_KEY.to_string(), Value::Array(entries));
    ExtractionResult::Single(record)
}

fn sheet_record(sheet: SheetResult, include_sheet_name: bool) -> Record {
    let mut record = Record::new();
    if include_sheet_name {
        record.insert(SHEET_NAME_KEY.to_string(), Value::String(sheet.sheet_name));
    }
    record.insert(
        ROWS_KEY.to_string(),
        Value::Array(sheet.rows.into_iter().map(Value::Object).collect()),
    );
    record
}

/// Convert a used range into header-keyed rows.
///
/// Empty cells are omitted and rows without any value are skipped. The row
/// number counts emitted rows, starting at 2 for the first data row.
pub fn sheet_rows(range: &Range<Data>, include_row_numbers: bool) -> Vec<Record> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers = header_keys(header_row);

    let mut records = Vec::new();
    for row in rows {
        let mut record = Record::new();
        if include_row_numbers {
            record.insert(ROW_NUMBER_KEY.to_string(), Value::from(records.len() + 2));
        }

        let mut has_value = false;
        for (header, cell) in headers.iter().zip(row.iter()) {
            if let Some(value) = cell_value(cell) {
                record.insert(header.clone(), value);
                has_value = true;
            }
        }

        if has_value {
            records.push(record);
        }
    }

    records
}

fn header_keys(row: &[Data]) -> Vec<String> {
    let mut empty_count = 0usize;
    row.iter()
        .map(|cell| {
            let text = cell_text(cell);
            if !text.is_empty() {
                return text;
            }
            let key = if empty_count == 0 {
                EMPTY_HEADER.to_string()
            } else {
                format!("{}_{}", EMPTY_HEADER, empty_count)
            };
            empty_count += 1;
            key
        })
        .collect()
}

/// JSON value for a data cell, or `None` for an empty one.
#[inline]
fn cell_value(data: &Data) -> Option<Value> {
    match data {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(Value::String(s.clone())),
        Data::Float(f) => Some(float_value(*f)),
        Data::Int(i) => Some(Value::from(*i)),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) | Data::Error(_) => {
            Some(Value::String(cell_text(data)))
        }
    }
}

fn float_value(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
        Value::from(f as i64)
    } else {
        Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
    }
}

/// Display text of a cell, as used for header keys.
#[inline]
fn cell_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}
