//! 対話式レビューモジュール
//!
//! 選択中カタログのエラー一覧を表示し、
//! 前後移動・状態変更・検索・フィルタ・出力を繰り返す。

use crate::error::Result;
use crate::export;
use crate::render::{render_catalog_detail, render_catalog_line, render_review_header};
use dialoguer::{Confirm, Input, Select};
use errori_checker_common::{
    aggregate_progress, find_catalog, CatalogEntry, Selection, Status, StatusFilter,
    StatusStorage, StatusStore,
};
use std::path::Path;

const RESET_PROMPT: &str = "Vuoi azzerare tutti i check? L'azione è irreversibile.";

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    /// 前のカタログ
    Previous,
    /// 次のカタログ
    Next,
    /// エラーの状態を変更
    ChangeStatus,
    /// ID検索
    Search,
    /// 完了フィルタ
    Filter,
    /// 一覧から選択
    PickCatalog,
    /// Excel出力
    Export,
    /// 全チェックを初期化
    Reset,
    /// 終了
    Quit,
}

impl ReviewAction {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewAction::Previous => "← Prec.",
            ReviewAction::Next => "Succ. →",
            ReviewAction::ChangeStatus => "Cambia stato",
            ReviewAction::Search => "Cerca ID catalogo…",
            ReviewAction::Filter => "Filtro",
            ReviewAction::PickCatalog => "Scegli catalogo",
            ReviewAction::Export => "↓ Export",
            ReviewAction::Reset => "Reset",
            ReviewAction::Quit => "Esci",
        }
    }
}

/// 現在の状態で選べるアクション
pub fn available_actions(
    has_previous: bool,
    has_next: bool,
    has_catalog: bool,
    any_visible: bool,
) -> Vec<ReviewAction> {
    let mut actions = Vec::new();
    if has_previous {
        actions.push(ReviewAction::Previous);
    }
    if has_next {
        actions.push(ReviewAction::Next);
    }
    if has_catalog {
        actions.push(ReviewAction::ChangeStatus);
    }
    actions.push(ReviewAction::Search);
    actions.push(ReviewAction::Filter);
    if any_visible {
        actions.push(ReviewAction::PickCatalog);
    }
    actions.push(ReviewAction::Export);
    actions.push(ReviewAction::Reset);
    actions.push(ReviewAction::Quit);
    actions
}

/// リセット前の確認
pub fn confirm_reset() -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(RESET_PROMPT)
        .default(false)
        .interact()?)
}

/// 対話式レビューを実行
pub fn run_review<S: StatusStorage>(
    source_name: &str,
    catalogs: &[CatalogEntry],
    store: &mut StatusStore<S>,
    mut selection: Selection,
    export_dir: &Path,
    export_file_name: &str,
) -> Result<()> {
    if catalogs.is_empty() {
        println!("⚠ Nessun catalogo valido nel file (servono le colonne id ed errore_N)");
        return Ok(());
    }

    loop {
        let statuses = store.snapshot();
        let filtered = selection.filtered(catalogs, &statuses);
        let current = selection
            .selected_id()
            .and_then(|id| find_catalog(catalogs, id));

        println!(
            "\n{}",
            render_review_header(source_name, &aggregate_progress(catalogs, &statuses))
        );
        println!(
            "Ricerca: \"{}\" · Filtro: {} · {}",
            selection.search,
            selection.filter.label(),
            selection.counter(&filtered)
        );
        println!("---");
        match current {
            Some(catalog) => println!("{}", render_catalog_detail(catalog, &statuses, filtered.len())),
            None => println!("Seleziona un catalogo dalla lista"),
        }
        if filtered.is_empty() {
            println!("Nessun risultato");
        }

        let actions = available_actions(
            selection.has_previous(&filtered),
            selection.has_next(&filtered),
            current.is_some(),
            !filtered.is_empty(),
        );
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::new()
            .with_prompt("Azione")
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            ReviewAction::Previous => {
                selection.previous(&filtered);
            }
            ReviewAction::Next => {
                selection.next(&filtered);
            }
            ReviewAction::ChangeStatus => {
                if let Some(catalog) = current {
                    prompt_status_change(catalog, store)?;
                }
            }
            ReviewAction::Search => {
                selection.search = Input::<String>::new()
                    .with_prompt("Cerca ID catalogo")
                    .with_initial_text(selection.search.clone())
                    .allow_empty(true)
                    .interact_text()?;
            }
            ReviewAction::Filter => {
                let labels: Vec<&str> = StatusFilter::ALL.iter().map(|f| f.label()).collect();
                let default = StatusFilter::ALL
                    .iter()
                    .position(|f| *f == selection.filter)
                    .unwrap_or(0);
                let idx = Select::new()
                    .with_prompt("Filtro")
                    .items(&labels)
                    .default(default)
                    .interact()?;
                selection.filter = StatusFilter::ALL[idx];
            }
            ReviewAction::PickCatalog => {
                let lines: Vec<String> = filtered
                    .iter()
                    .map(|c| render_catalog_line(c, &statuses, Some(c.id.as_str()) == selection.selected_id()))
                    .collect();
                let idx = Select::new()
                    .with_prompt("Catalogo")
                    .items(&lines)
                    .default(selection.index_in(&filtered).unwrap_or(0))
                    .max_length(15)
                    .interact()?;
                selection.select(filtered[idx].id.clone());
            }
            ReviewAction::Export => {
                match export::export_log(catalogs, &statuses, export_dir, export_file_name)? {
                    Some(path) => println!("✔ Esportato: {}", path.display()),
                    None => println!("⚠ Nessun catalogo da esportare"),
                }
            }
            ReviewAction::Reset => {
                let confirmed = confirm_reset()?;
                if store.reset_all(|| confirmed) {
                    println!("✔ Tutti i check sono stati azzerati");
                }
            }
            ReviewAction::Quit => break,
        }
    }

    Ok(())
}

/// エラー番号と新しい状態を選んで更新
fn prompt_status_change<S: StatusStorage>(
    catalog: &CatalogEntry,
    store: &mut StatusStore<S>,
) -> Result<()> {
    let items: Vec<String> = catalog
        .errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("{}. [{}] {}", i + 1, store.get(&catalog.id, i).label(), err))
        .collect();
    let index = Select::new()
        .with_prompt("Errore")
        .items(&items)
        .default(0)
        .max_length(15)
        .interact()?;

    let current = store.get(&catalog.id, index);
    let labels: Vec<&str> = Status::ALL.iter().map(|s| s.label()).collect();
    let default = Status::ALL.iter().position(|s| *s == current).unwrap_or(0);
    let choice = Select::new()
        .with_prompt("Stato")
        .items(&labels)
        .default(default)
        .interact()?;

    let status = Status::ALL[choice];
    store.set(&catalog.id, index, status);
    println!("  → {}. {}", index + 1, status.label());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_actions_hidden() {
        let actions = available_actions(false, true, true, true);
        assert!(!actions.contains(&ReviewAction::Previous));
        assert!(actions.contains(&ReviewAction::Next));

        let actions = available_actions(true, false, true, true);
        assert!(actions.contains(&ReviewAction::Previous));
        assert!(!actions.contains(&ReviewAction::Next));
    }

    #[test]
    fn test_no_selection_actions() {
        let actions = available_actions(false, false, false, false);
        assert_eq!(
            actions,
            vec![
                ReviewAction::Search,
                ReviewAction::Filter,
                ReviewAction::Export,
                ReviewAction::Reset,
                ReviewAction::Quit,
            ]
        );
    }

    #[test]
    fn test_action_labels_not_empty() {
        for action in available_actions(true, true, true, true) {
            assert!(!action.label().is_empty());
        }
    }
}
