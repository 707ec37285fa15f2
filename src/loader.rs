//! カタログファイルの読み込み（デコード + 正規化）

use crate::decoder;
use crate::error::{CheckerError, Result};
use crate::normalizer;
use errori_checker_common::{find_catalog, CatalogEntry};
use std::path::Path;

/// ファイルからカタログ一覧を読み込む
pub fn load_catalogs(path: &Path) -> Result<Vec<CatalogEntry>> {
    if !path.exists() {
        return Err(CheckerError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let rows = decoder::decode_bytes(&bytes)?;
    let catalogs = normalizer::normalize_rows(&rows);

    tracing::info!(
        file = %path.display(),
        rows = rows.len(),
        catalogs = catalogs.len(),
        "catalog file loaded"
    );
    Ok(catalogs)
}

/// IDでカタログを取得（見つからなければエラー）
pub fn require_catalog<'a>(catalogs: &'a [CatalogEntry], id: &str) -> Result<&'a CatalogEntry> {
    find_catalog(catalogs, id).ok_or_else(|| CheckerError::CatalogNotFound(id.to_string()))
}

/// 表示番号（1始まり）をエラーインデックスに変換
pub fn error_index(catalog: &CatalogEntry, number: usize) -> Result<usize> {
    if number == 0 || number > catalog.errors.len() {
        return Err(CheckerError::ErrorIndexOutOfRange {
            catalog: catalog.id.clone(),
            number,
            total: catalog.errors.len(),
        });
    }
    Ok(number - 1)
}
