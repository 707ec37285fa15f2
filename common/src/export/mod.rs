//! エクスポートのコア処理（CLIラッパーから利用）

#[cfg(feature = "excel")]
pub mod excel_core;

use crate::status_store::{resolve_status, StatusMap};
use crate::types::{CatalogEntry, Status};

/// 出力ファイル名
pub const LOG_FILE_NAME: &str = "errori_log.xlsx";
/// 出力シート名
pub const LOG_SHEET_NAME: &str = "Log";
/// ヘッダー（列順）
pub const LOG_HEADERS: [&str; 3] = ["Catalogo", "Errore", "Status"];

/// ログの1行: (カタログ, エラー) の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    pub catalog: String,
    pub error: String,
    pub status: Status,
}

impl LogRow {
    /// Status列に書く表示ラベル
    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }
}

/// カタログ順→エラー順に平坦化
pub fn build_log_rows(catalogs: &[CatalogEntry], statuses: &StatusMap) -> Vec<LogRow> {
    catalogs
        .iter()
        .flat_map(|c| {
            c.errors.iter().enumerate().map(move |(i, err)| LogRow {
                catalog: c.id.clone(),
                error: err.clone(),
                status: resolve_status(statuses, &c.id, i),
            })
        })
        .collect()
}
