//! ログExcelのファイル出力

use crate::error::{CheckerError, Result};
use errori_checker_common::export::{build_log_rows, excel_core};
use errori_checker_common::{CatalogEntry, StatusMap};
use std::path::{Path, PathBuf};

/// 出力先を解決
///
/// 既存ディレクトリ、または区切り文字で終わるパスならファイル名を付け足す。
/// それ以外はそのままファイルパスとして使う。
pub fn output_path(output: &Path, file_name: &str) -> PathBuf {
    let trailing_separator = output
        .to_str()
        .is_some_and(|s| s.ends_with('/') || s.ends_with(std::path::MAIN_SEPARATOR));
    if output.is_dir() || trailing_separator {
        output.join(file_name)
    } else {
        output.to_path_buf()
    }
}

/// 出力先の指定がなければカレントディレクトリ
pub fn output_or_current_dir(output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from("."))
}

/// チェック結果をExcelに出力
///
/// カタログが0件なら何もせず `None` を返す。
pub fn export_log(
    catalogs: &[CatalogEntry],
    statuses: &StatusMap,
    output: &Path,
    file_name: &str,
) -> Result<Option<PathBuf>> {
    if catalogs.is_empty() {
        tracing::debug!("no catalogs loaded, export skipped");
        return Ok(None);
    }

    let rows = build_log_rows(catalogs, statuses);
    let buffer = excel_core::generate_log_buffer(&rows)
        .map_err(|e| CheckerError::ExcelGeneration(e.to_string()))?;

    let path = output_path(output, file_name);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, buffer)?;

    tracing::info!(path = %path.display(), rows = rows.len(), "log exported");
    Ok(Some(path))
}

