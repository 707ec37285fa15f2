use crate::error::{CheckerError, Result};
use errori_checker_common::export::LOG_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ストアパスを上書きする環境変数
pub const STORE_ENV_VAR: &str = "ERRORI_CHECKER_STORE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ステータスストアのJSONファイル（未指定ならデータディレクトリ）
    pub store_path: Option<PathBuf>,
    pub export_file_name: String,
    /// 一覧表示の1ページあたり件数
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            export_file_name: LOG_FILE_NAME.into(),
            page_size: 20,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CheckerError::Config("directory home non trovata".into()))?;
        Ok(home.join(".config").join("errori-checker").join("config.json"))
    }

    /// ストアパスを解決
    ///
    /// 優先順位: 引数 > 環境変数 > 設定ファイル > データディレクトリ
    pub fn resolve_store_path(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        store_path_precedence(
            explicit,
            std::env::var(STORE_ENV_VAR).ok(),
            self.store_path.as_ref(),
            crate::storage::default_store_path,
        )
    }

    pub fn set_store_path(&mut self, path: PathBuf) -> Result<()> {
        self.store_path = Some(path);
        self.save()
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(CheckerError::Config("page_size deve essere maggiore di 0".into()));
        }
        self.page_size = page_size;
        self.save()
    }
}

/// ストアパスの優先順位を適用
///
/// 空白だけの環境変数は未設定として扱う。`fallback` は他がすべて無いときだけ呼ぶ。
pub fn store_path_precedence<F>(
    explicit: Option<PathBuf>,
    env: Option<String>,
    configured: Option<&PathBuf>,
    fallback: F,
) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = env.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = configured {
        return Ok(path.clone());
    }
    fallback()
}
