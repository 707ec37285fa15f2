//! ステータスストアのファイル永続化
//!
//! スロット1つ = JSONファイル1つ。

use crate::error::{CheckerError, Result};
use errori_checker_common::{StatusStorage, StatusStore, STORAGE_KEY};
use std::path::{Path, PathBuf};

/// JSONファイルをスロットとして使うストレージ
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatusStorage for FileStorage {
    fn load(&self) -> errori_checker_common::Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn save(&self, payload: &str) -> errori_checker_common::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }
}

/// 既定のストアパス: `<data_dir>/errori-checker/errori_checks_v1.json`
pub fn default_store_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| CheckerError::Config("directory dati non trovata".into()))?;
    Ok(data_dir
        .join("errori-checker")
        .join(format!("{}.json", STORAGE_KEY)))
}

/// ファイルストアを開く（読み込み失敗は空ストア）
pub fn open_store(path: impl Into<PathBuf>) -> StatusStore<FileStorage> {
    let storage = FileStorage::new(path);
    tracing::debug!(path = %storage.path().display(), "opening status store");
    StatusStore::load(storage)
}
