//! カタログ表示用の派生データ
//!
//! 進捗集計・検索/フィルタ・ページ分割・選択ナビゲーション。
//! どれもカタログ一覧とステータスマップから毎回計算し直す。

use crate::status_store::{resolve_status, StatusMap};
use crate::types::{CatalogEntry, Status};

/// カタログ単位の進捗
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    /// 全エラーが Done
    pub fn is_complete(&self) -> bool {
        self.done == self.total
    }
}

/// 全カタログの進捗
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateProgress {
    pub total_done: usize,
    pub total_all: usize,
    /// 0-100（四捨五入）
    pub percent: u32,
}

pub fn catalog_progress(catalog: &CatalogEntry, statuses: &StatusMap) -> Progress {
    let done = (0..catalog.errors.len())
        .filter(|&i| resolve_status(statuses, &catalog.id, i) == Status::Done)
        .count();
    Progress {
        done,
        total: catalog.errors.len(),
    }
}

/// フィルタに関係なく全カタログを合算する
pub fn aggregate_progress(catalogs: &[CatalogEntry], statuses: &StatusMap) -> AggregateProgress {
    let (total_done, total_all) = catalogs
        .iter()
        .map(|c| catalog_progress(c, statuses))
        .fold((0, 0), |(done, all), p| (done + p.done, all + p.total));

    let percent = if total_all > 0 {
        (total_done as f64 / total_all as f64 * 100.0).round() as u32
    } else {
        0
    };

    AggregateProgress {
        total_done,
        total_all,
        percent,
    }
}

/// 完了状態によるフィルタ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [
        StatusFilter::All,
        StatusFilter::Incomplete,
        StatusFilter::Complete,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "Tutti",
            StatusFilter::Complete => "Fatti",
            StatusFilter::Incomplete => "Da fare",
        }
    }

    pub fn accepts(&self, progress: Progress) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Complete => progress.is_complete(),
            StatusFilter::Incomplete => !progress.is_complete(),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "complete" => Ok(StatusFilter::Complete),
            "incomplete" => Ok(StatusFilter::Incomplete),
            _ => Err(format!(
                "Unknown filter: {}. Use all, complete, or incomplete",
                s
            )),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => write!(f, "all"),
            StatusFilter::Complete => write!(f, "complete"),
            StatusFilter::Incomplete => write!(f, "incomplete"),
        }
    }
}

/// 検索（IDの部分一致、大文字小文字無視）とフィルタを両方満たすカタログ
///
/// 元の並び順を保つ。
pub fn filter_catalogs<'a>(
    catalogs: &'a [CatalogEntry],
    statuses: &StatusMap,
    search: &str,
    filter: StatusFilter,
) -> Vec<&'a CatalogEntry> {
    let needle = search.to_lowercase();
    catalogs
        .iter()
        .filter(|c| needle.is_empty() || c.id.to_lowercase().contains(&needle))
        .filter(|c| filter.accepts(catalog_progress(c, statuses)))
        .collect()
}

/// IDでカタログを引く（重複IDは後勝ち）
pub fn find_catalog<'a>(catalogs: &'a [CatalogEntry], id: &str) -> Option<&'a CatalogEntry> {
    catalogs.iter().rev().find(|c| c.id == id)
}

/// 選択中カタログのフィルタ済み一覧内での位置
pub fn navigation_index(filtered: &[&CatalogEntry], selected: Option<&str>) -> Option<usize> {
    let selected = selected?;
    filtered.iter().position(|c| c.id == selected)
}

/// ページ分割の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 0始まり（範囲外の指定は最終ページに丸める）
    pub page: usize,
    pub page_count: usize,
}

pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let page_count = items.len().div_ceil(page_size).max(1);
    let page = page.min(page_count - 1);
    let start = (page * page_size).min(items.len());
    let end = (start + page_size).min(items.len());
    Page {
        items: &items[start..end],
        page,
        page_count,
    }
}

/// 検索・フィルタ・選択の一時状態（永続化しない）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub search: String,
    pub filter: StatusFilter,
    pub selected: Option<String>,
}

impl Selection {
    /// 読み込み直後の状態: 先頭カタログを選択
    pub fn for_catalogs(catalogs: &[CatalogEntry]) -> Self {
        Self {
            selected: catalogs.first().map(|c| c.id.clone()),
            ..Self::default()
        }
    }

    pub fn filtered<'a>(
        &self,
        catalogs: &'a [CatalogEntry],
        statuses: &StatusMap,
    ) -> Vec<&'a CatalogEntry> {
        filter_catalogs(catalogs, statuses, &self.search, self.filter)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn select(&mut self, id: impl Into<String>) {
        self.selected = Some(id.into());
    }

    pub fn index_in(&self, filtered: &[&CatalogEntry]) -> Option<usize> {
        navigation_index(filtered, self.selected_id())
    }

    pub fn has_previous(&self, filtered: &[&CatalogEntry]) -> bool {
        matches!(self.index_in(filtered), Some(i) if i > 0)
    }

    pub fn has_next(&self, filtered: &[&CatalogEntry]) -> bool {
        matches!(self.index_in(filtered), Some(i) if i + 1 < filtered.len())
    }

    /// 前のカタログへ（先頭・一覧外では何もしない）
    pub fn previous(&mut self, filtered: &[&CatalogEntry]) -> Option<&str> {
        if let Some(i) = self.index_in(filtered).filter(|&i| i > 0) {
            self.selected = Some(filtered[i - 1].id.clone());
        }
        self.selected_id()
    }

    /// 次のカタログへ（末尾・一覧外では何もしない）
    pub fn next(&mut self, filtered: &[&CatalogEntry]) -> Option<&str> {
        if let Some(i) = self.index_in(filtered).filter(|&i| i + 1 < filtered.len()) {
            self.selected = Some(filtered[i + 1].id.clone());
        }
        self.selected_id()
    }

    /// `"<位置> / <件数>"`（一覧外は位置0）
    pub fn counter(&self, filtered: &[&CatalogEntry]) -> String {
        let position = self.index_in(filtered).map(|i| i + 1).unwrap_or(0);
        format!("{} / {}", position, filtered.len())
    }
}
