//! Excel生成（共通ライブラリ）
//!
//! チェック結果を `Catalogo / Errore / Status` の1シートに書き出す

use super::{LogRow, LOG_HEADERS, LOG_SHEET_NAME};
use crate::error::{Error, Result};
use rust_xlsxwriter::*;

/// 列幅（文字数）
const COLUMN_WIDTHS: [f64; 3] = [18.0, 80.0, 16.0];

/// ログExcelをバッファに生成
pub fn generate_log_buffer(rows: &[LogRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(LOG_SHEET_NAME)
        .map_err(|e| Error::Excel(format!("シート名設定エラー: {}", e)))?;

    for (col, (header, width)) in LOG_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, *header, &header_format)
            .map_err(|e| Error::Excel(format!("ヘッダー書き込みエラー: {}", e)))?;
        worksheet
            .set_column_width(col, width)
            .map_err(|e| Error::Excel(format!("列幅設定エラー: {}", e)))?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        let values = [row.catalog.as_str(), row.error.as_str(), row.status_label()];
        for (col, value) in values.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, *value)
                .map_err(|e| Error::Excel(format!("値書き込みエラー: {}", e)))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Excel(format!("Excel保存エラー: {}", e)))
}
