//! エラー列（`errore_<N>`）の判定と並び替え

use regex::Regex;

/// エラー列の接頭辞
pub const ERROR_COLUMN_PREFIX: &str = "errore_";

/// 列名から並び順キーを取得
///
/// `errore_` で始まらない列は `None`。
/// 番号が読めない列は番号付きの列の後ろに並ぶ。
pub fn error_column_order(column: &str) -> Option<u64> {
    lazy_static::lazy_static! {
        static ref NUMBER_RE: Regex = Regex::new(r"^errore_(\d+)").unwrap();
    }

    if !column.starts_with(ERROR_COLUMN_PREFIX) {
        return None;
    }

    let order = NUMBER_RE
        .captures(column)
        .and_then(|caps| caps[1].parse::<u64>().ok())
        .unwrap_or(u64::MAX);
    Some(order)
}

/// エラー列を番号順に並べた (列名, 値) の一覧
///
/// 番号が同じ列は元の列順を保つ（安定ソート）。
pub fn sorted_error_cells<'a, I>(cells: I) -> Vec<(&'a str, &'a str)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut columns: Vec<(u64, &str, &str)> = cells
        .into_iter()
        .filter_map(|(name, value)| error_column_order(name).map(|order| (order, name, value)))
        .collect();
    columns.sort_by_key(|(order, _, _)| *order);
    columns
        .into_iter()
        .map(|(_, name, value)| (name, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_column_order() {
        assert_eq!(error_column_order("errore_3"), Some(3));
        assert_eq!(error_column_order("errore_10"), Some(10));
        assert_eq!(error_column_order("errore_1_1"), Some(1));
        assert_eq!(error_column_order("errore_x"), Some(u64::MAX));
        assert_eq!(error_column_order("id"), None);
        assert_eq!(error_column_order("Errore_1"), None);
    }

    #[test]
    fn test_sorted_error_cells_numeric_order() {
        let cells = vec![
            ("id", "X"),
            ("errore_2", "b"),
            ("errore_10", "c"),
            ("errore_1", "a"),
        ];
        let sorted = sorted_error_cells(cells);
        let values: Vec<_> = sorted.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sorted_error_cells_stable_for_duplicates() {
        let cells = vec![("errore_1", "first"), ("errore_0", "zero"), ("errore_1", "second")];
        let sorted = sorted_error_cells(cells);
        let values: Vec<_> = sorted.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec!["zero", "first", "second"]);
    }
}
