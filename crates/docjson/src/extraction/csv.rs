//! Line-oriented CSV extraction.
//!
//! Splits on `\n` and `,` with no quoting support: a quoted field containing a
//! comma is split like any other. Values and headers are trimmed, which also
//! strips the `\r` of CRLF line endings.

use serde_json::Value;

use crate::extraction::excel::ROW_NUMBER_KEY;
use crate::types::Record;

pub const DATA_KEY: &str = "data";

/// Parse CSV text into `{data: [row, ...]}`.
///
/// The first line supplies the headers. Each later non-blank line becomes a
/// row: values are matched to headers by position, missing values become
/// `""` and extra values are dropped. With `include_row_numbers`, each row
/// starts with `row_number`, the 1-based physical line number.
pub fn extract_csv(bytes: &[u8], include_row_numbers: bool) -> Record {
    let text = String::from_utf8_lossy(bytes);
    let mut lines = text.split('\n');

    let headers: Vec<&str> = lines
        .next()
        .map(|line| line.split(',').map(str::trim).collect())
        .unwrap_or_default();

    let rows: Vec<Value> = lines
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let values: Vec<&str> = line.split(',').collect();
            let mut row = Record::new();
            if include_row_numbers {
                // `index` counts from the second physical line
                row.insert(ROW_NUMBER_KEY.to_string(), Value::from(index + 2));
            }
            for (position, header) in headers.iter().enumerate() {
                let value = values.get(position).map(|v| v.trim()).unwrap_or_default();
                row.insert((*header).to_string(), Value::String(value.to_string()));
            }
            Value::Object(row)
        })
        .collect();

    let mut record = Record::new();
    record.insert(DATA_KEY.to_string(), Value::Array(rows));
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_rows() {
        let record = extract_csv(b"a,b\n1,2\n3,4\n", false);
        assert_eq!(
            Value::Object(record),
            json!({"data": [{"a": "1", "b": "2"}, {"a": "3", "b": "4"}]})
        );
    }

    #[test]
    fn test_row_numbers_are_physical_lines() {
        let record = extract_csv(b"a,b\n1,2\n\n3,4\n", true);
        let rows = record[DATA_KEY].as_array().unwrap();
        assert_eq!(rows[0], json!({"row_number": 2, "a": "1", "b": "2"}));
        assert_eq!(rows[1], json!({"row_number": 4, "a": "3", "b": "4"}));
    }

    #[test]
    fn test_missing_and_extra_values() {
        let record = extract_csv(b"a,b,c\n1\n1,2,3,4\n", false);
        let rows = record[DATA_KEY].as_array().unwrap();
        assert_eq!(rows[0], json!({"a": "1", "b": "", "c": ""}));
        assert_eq!(rows[1], json!({"a": "1", "b": "2", "c": "3"}));
    }

    #[test]
    fn test_crlf_and_whitespace_trimmed() {
        let record = extract_csv(b" name , city \r\n Ann , Oslo \r\n", false);
        assert_eq!(record[DATA_KEY], json!([{"name": "Ann", "city": "Oslo"}]));
    }

    #[test]
    fn test_quoted_commas_are_not_special() {
        let record = extract_csv(b"a,b\n\"x,y\",z\n", false);
        assert_eq!(record[DATA_KEY], json!([{"a": "\"x", "b": "y\""}]));
    }

    #[test]
    fn test_header_only_and_empty_input() {
        assert_eq!(extract_csv(b"a,b", false)[DATA_KEY], json!([]));
        assert_eq!(extract_csv(b"", true)[DATA_KEY], json!([]));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let record = extract_csv(b"a\n\xffx\n", false);
        assert_eq!(record[DATA_KEY], json!([{"a": "\u{fffd}x"}]));
    }
}
