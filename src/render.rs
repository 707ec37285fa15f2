//! 端末表示用の整形

use errori_checker_common::{
    catalog_progress, resolve_status, AggregateProgress, CatalogEntry, Status, StatusMap,
};

/// 状態ごとの1文字記号
pub fn status_symbol(status: Status) -> char {
    match status {
        Status::Pending => '·',
        Status::Done => '✓',
        Status::Impossible => '✗',
        Status::Reviewing => '?',
    }
}

/// 進捗バー（幅 `width` 文字）
pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// ヘッダー行: バー・割合・件数
pub fn render_summary(progress: &AggregateProgress) -> String {
    format!(
        "{} {:>3}%  {}/{}",
        progress_bar(progress.percent, 30),
        progress.percent,
        progress.total_done,
        progress.total_all
    )
}

/// 対話レビューの見出し: 読み込んだファイル名と全体の進捗
pub fn render_review_header(source_name: &str, progress: &AggregateProgress) -> String {
    format!("File: {}\n{}", source_name, render_summary(progress))
}

/// 一覧の1行: 選択マーク・ID・状態記号・件数
pub fn render_catalog_line(catalog: &CatalogEntry, statuses: &StatusMap, selected: bool) -> String {
    let progress = catalog_progress(catalog, statuses);
    let dots: String = (0..catalog.errors.len())
        .map(|i| status_symbol(resolve_status(statuses, &catalog.id, i)))
        .collect();
    format!(
        "{} {:<24} {} {}/{}",
        if selected { '>' } else { ' ' },
        catalog.id,
        dots,
        progress.done,
        progress.total
    )
}

/// カタログ詳細: 見出しと番号付きのエラー一覧
pub fn render_catalog_detail(
    catalog: &CatalogEntry,
    statuses: &StatusMap,
    visible_catalogs: usize,
) -> String {
    let progress = catalog_progress(catalog, statuses);
    let mut out = format!(
        "{}\n{} / {} errori controllati · {} cataloghi visibili\n",
        catalog.id, progress.done, progress.total, visible_catalogs
    );
    for (i, err) in catalog.errors.iter().enumerate() {
        let status = resolve_status(statuses, &catalog.id, i);
        out.push_str(&format!("\n{:>3}. [{}] {}", i + 1, status.label(), err));
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use errori_checker_common::status_key;

    fn sample() -> (CatalogEntry, StatusMap) {
        let catalog = CatalogEntry::new(
            "CAT-7",
            vec!["prima".to_string(), "seconda".to_string(), "terza".to_string()],
        );
        let mut map = StatusMap::new();
        map.insert(status_key("CAT-7", 0), Status::Done);
        map.insert(status_key("CAT-7", 2), Status::Impossible);
        (catalog, map)
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10), "[----------]");
        assert_eq!(progress_bar(50, 10), "[#####-----]");
        assert_eq!(progress_bar(100, 10), "[##########]");
        assert_eq!(progress_bar(250, 4), "[####]");
    }

    #[test]
    fn test_render_catalog_line() {
        let (catalog, map) = sample();
        let line = render_catalog_line(&catalog, &map, true);
        assert!(line.starts_with('>'));
        assert!(line.contains("CAT-7"));
        assert!(line.contains("✓·✗"));
        assert!(line.ends_with("1/3"));
    }

    #[test]
    fn test_render_catalog_detail() {
        let (catalog, map) = sample();
        let detail = render_catalog_detail(&catalog, &map, 4);
        assert!(detail.contains("1 / 3 errori controllati"));
        assert!(detail.contains("4 cataloghi visibili"));
        assert!(detail.contains("  1. [Fatto ✓] prima"));
        assert!(detail.contains("  2. [Pendente] seconda"));
        assert!(detail.contains("  3. [Non eseguibile] terza"));
    }

    #[test]
    fn test_render_review_header() {
        let progress = AggregateProgress {
            total_done: 1,
            total_all: 4,
            percent: 25,
        };
        let header = render_review_header("cataloghi.xlsx", &progress);
        let mut lines = header.lines();
        assert_eq!(lines.next(), Some("File: cataloghi.xlsx"));
        assert!(lines.next().is_some_and(|l| l.ends_with(" 25%  1/4")));
    }
}
