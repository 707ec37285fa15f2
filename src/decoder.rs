//! スプレッドシート読み込み
//!
//! 先頭シートのみを対象に、1行目をヘッダーとして
//! 以降の行を (列名 → セル文字列) に変換する。

use crate::error::{CheckerError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use errori_checker_common::RawRow;
use std::io::Cursor;

/// バイト列をデコード（xlsx/xlsm/xlsb/xls/ods）
pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| CheckerError::Decode(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| CheckerError::Decode("nessun foglio nel file".into()))?
        .map_err(|e| CheckerError::Decode(e.to_string()))?;

    let mut lines = range.rows();
    let Some(header) = lines.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header.iter().map(cell_text).collect();

    let mut rows = Vec::new();
    for line in lines {
        if line.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let mut row = RawRow::new();
        for (col, name) in headers.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            let value = line.get(col).map(cell_text).unwrap_or_default();
            row.push(name.as_str(), value);
        }
        rows.push(row);
    }

    tracing::debug!(rows = rows.len(), columns = headers.len(), "sheet decoded");
    Ok(rows)
}

/// セルを表示文字列に変換
///
/// 整数値の浮動小数は小数点なし（3.0 → "3"）。
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => e.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_numbers() {
        assert_eq!(cell_text(&Data::Float(3.0)), "3");
        assert_eq!(cell_text(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_text(&Data::Int(42)), "42");
    }

    #[test]
    fn test_cell_text_misc() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::Bool(true)), "true");
        assert_eq!(cell_text(&Data::String(" x ".to_string())), " x ");
    }

    #[test]
    fn test_decode_garbage_is_error() {
        let result = decode_bytes(b"questo non e un foglio di calcolo");
        assert!(matches!(result, Err(CheckerError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_is_error() {
        assert!(matches!(decode_bytes(&[]), Err(CheckerError::Decode(_))));
    }
}
