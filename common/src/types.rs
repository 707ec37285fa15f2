//! カタログとステータスの型定義
//!
//! - RawRow: スプレッドシートの1行（列名 → セル文字列）
//! - CatalogEntry: 正規化済みのカタログ（ID + エラー一覧）
//! - Status: エラー1件のレビュー状態

use serde::{Deserialize, Serialize};

/// デコード直後の1行
///
/// 列はヘッダー順に保持する。同名ヘッダーも全て残し、
/// 名前での参照は最初の列を返す。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.push((column.into(), value.into()));
    }

    /// 列名で参照（存在しない列は空文字）
    pub fn get(&self, column: &str) -> &str {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// (列名, 値) をヘッダー順に返す
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.push(k, v);
        }
        row
    }
}

/// 正規化済みカタログ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    /// 順序がそのまま番号とステータスキーのインデックスになる
    pub errors: Vec<String>,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            id: id.into(),
            errors,
        }
    }
}

/// エラー1件のレビュー状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Done,
    Impossible,
    Reviewing,
}

impl Status {
    /// 選択肢の表示順
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Reviewing,
        Status::Done,
        Status::Impossible,
    ];

    /// 永続化用トークン
    pub fn token(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::Done => "done",
            Status::Impossible => "impossible",
            Status::Reviewing => "reviewing",
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pendente",
            Status::Done => "Fatto ✓",
            Status::Impossible => "Non eseguibile",
            Status::Reviewing => "In revisione…",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "pending" => Some(Status::Pending),
            "done" => Some(Status::Done),
            "impossible" => Some(Status::Impossible),
            "reviewing" => Some(Status::Reviewing),
            _ => None,
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Status::from_token(s.trim().to_lowercase().as_str()).ok_or_else(|| {
            format!(
                "Unknown status: {}. Use pending, done, impossible, or reviewing",
                s
            )
        })
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// ステータスマップのキー `"<catalogId>__<errorIndex>"`
pub fn status_key(catalog_id: &str, error_index: usize) -> String {
    format!("{}__{}", catalog_id, error_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(Status::default(), Status::Pending);
    }

    #[test]
    fn test_status_serialize_as_token() {
        let json = serde_json::to_string(&Status::Reviewing).expect("シリアライズ失敗");
        assert_eq!(json, "\"reviewing\"");

        let status: Status = serde_json::from_str("\"impossible\"").expect("デシリアライズ失敗");
        assert_eq!(status, Status::Impossible);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Pending.label(), "Pendente");
        assert_eq!(Status::Done.label(), "Fatto ✓");
        assert_eq!(Status::Impossible.label(), "Non eseguibile");
        assert_eq!(Status::Reviewing.label(), "In revisione…");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("DONE".parse::<Status>(), Ok(Status::Done));
        assert_eq!(" pending ".parse::<Status>(), Ok(Status::Pending));
        assert!("fatto".parse::<Status>().is_err());
    }

    #[test]
    fn test_status_key_format() {
        assert_eq!(status_key("CAT-01", 0), "CAT-01__0");
        assert_eq!(status_key("a__b", 12), "a__b__12");
    }

    #[test]
    fn test_raw_row_first_column_wins() {
        let row: RawRow = vec![("id", "A"), ("errore_1", "x"), ("id", "B")]
            .into_iter()
            .collect();
        assert_eq!(row.get("id"), "A");
        assert_eq!(row.get("missing"), "");
        assert_eq!(row.len(), 3);
    }
}
