//! カタログ正規化モジュール
//!
//! デコード済みの行をカタログに変換する。
//!
//! ## 処理フロー
//! 1. `id` 列を取得（前後の空白を除去）
//! 2. `errore_<N>` 列を番号順に並べ、空のセルを除外
//! 3. IDもエラーも空でない行だけを残す

pub mod columns;

use errori_checker_common::{CatalogEntry, RawRow};

/// ID列の名前
pub const ID_COLUMN: &str = "id";

/// 1行をカタログに変換（不正な行は `None`）
pub fn normalize_row(row: &RawRow) -> Option<CatalogEntry> {
    let id = row.get(ID_COLUMN).trim();
    if id.is_empty() {
        return None;
    }

    let errors: Vec<String> = columns::sorted_error_cells(row.cells())
        .into_iter()
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();

    if errors.is_empty() {
        return None;
    }

    Some(CatalogEntry::new(id, errors))
}

/// 全行を正規化（行順を保持、ID重複はそのまま）
pub fn normalize_rows(rows: &[RawRow]) -> Vec<CatalogEntry> {
    let catalogs: Vec<CatalogEntry> = rows.iter().filter_map(normalize_row).collect();

    let dropped = rows.len() - catalogs.len();
    if dropped > 0 {
        tracing::debug!(dropped, "rows without id or errors skipped");
    }

    catalogs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells.iter().copied().collect()
    }

    #[test]
    fn test_errors_sorted_by_number() {
        let r = row(&[("errore_2", "b"), ("errore_1", "a"), ("id", "C"), ("errore_10", "c")]);
        let catalog = normalize_row(&r).expect("カタログが生成されない");
        assert_eq!(catalog.errors, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_error_cells_dropped() {
        let r = row(&[("id", "X"), ("errore_1", ""), ("errore_2", "only")]);
        assert_eq!(
            normalize_row(&r),
            Some(CatalogEntry::new("X", vec!["only".to_string()]))
        );
    }

    #[test]
    fn test_values_trimmed() {
        let r = row(&[("id", "  X1 "), ("errore_1", "  testo  "), ("errore_2", "   ")]);
        let catalog = normalize_row(&r).expect("カタログが生成されない");
        assert_eq!(catalog.id, "X1");
        assert_eq!(catalog.errors, vec!["testo"]);
    }

    #[test]
    fn test_rows_without_id_excluded() {
        assert_eq!(normalize_row(&row(&[("id", ""), ("errore_1", "a")])), None);
        assert_eq!(normalize_row(&row(&[("id", "   "), ("errore_1", "a")])), None);
        assert_eq!(normalize_row(&row(&[("errore_1", "a")])), None);
    }

    #[test]
    fn test_rows_without_errors_excluded() {
        assert_eq!(normalize_row(&row(&[("id", "Y"), ("errore_1", ""), ("errore_2", " ")])), None);
        assert_eq!(normalize_row(&row(&[("id", "Y"), ("note", "x")])), None);
    }

    #[test]
    fn test_normalize_rows_keeps_order_and_duplicates() {
        let rows = vec![
            row(&[("id", "B"), ("errore_1", "b")]),
            row(&[("id", ""), ("errore_1", "skip")]),
            row(&[("id", "A"), ("errore_1", "a")]),
            row(&[("id", "B"), ("errore_1", "b2")]),
        ];
        let ids: Vec<_> = normalize_rows(&rows).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["B", "A", "B"]);
    }
}
