//! ステータスストア
//!
//! (カタログID, エラー番号) → Status のマップを保持し、
//! 変更のたびに永続化スロットへ書き込む。
//!
//! - 読み込み失敗・パース失敗は空マップとして扱う
//! - 書き込み失敗はログに残して無視する
//! - 変更はコピーオンライトで、取得済みのスナップショットには影響しない

use crate::error::Result;
use crate::types::{status_key, Status};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::Arc;

/// 永続化スロット名
pub const STORAGE_KEY: &str = "errori_checks_v1";

/// キー `"<catalogId>__<errorIndex>"` → Status
pub type StatusMap = BTreeMap<String, Status>;

/// 永続化スロットのポート
///
/// スロットはシリアライズ済みの文字列を1つだけ保持する。
pub trait StatusStorage {
    /// 保存済みの内容を読む（未保存なら `None`）
    fn load(&self) -> Result<Option<String>>;

    /// 内容を丸ごと置き換える
    fn save(&self, payload: &str) -> Result<()>;
}

impl<S: StatusStorage + ?Sized> StatusStorage for &S {
    fn load(&self) -> Result<Option<String>> {
        (**self).load()
    }

    fn save(&self, payload: &str) -> Result<()> {
        (**self).save(payload)
    }
}

/// メモリ上のスロット（テスト・一時利用向け）
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(payload.into())),
        }
    }

    /// 現在の保存内容
    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl StatusStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, payload: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// スロットの内容をマップに変換
///
/// 既知のトークン以外の値を持つエントリは個別に捨てる。
pub fn parse_status_map(payload: &str) -> Result<StatusMap> {
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(payload)?;
    let mut map = StatusMap::new();
    for (key, value) in raw {
        match value.as_str().and_then(Status::from_token) {
            Some(status) => {
                map.insert(key, status);
            }
            None => tracing::debug!(%key, "unknown status token skipped"),
        }
    }
    Ok(map)
}

/// スロットからマップを読む（失敗は空マップ）
pub fn read_status_map<S: StatusStorage>(storage: &S) -> StatusMap {
    let payload = match storage.load() {
        Ok(Some(payload)) => payload,
        Ok(None) => return StatusMap::new(),
        Err(e) => {
            tracing::warn!("status slot unreadable, starting empty: {}", e);
            return StatusMap::new();
        }
    };

    match parse_status_map(&payload) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!("status slot corrupt, starting empty: {}", e);
            StatusMap::new()
        }
    }
}

/// マップから状態を解決（未登録は Pending）
pub fn resolve_status(map: &StatusMap, catalog_id: &str, error_index: usize) -> Status {
    map.get(&status_key(catalog_id, error_index))
        .copied()
        .unwrap_or_default()
}

/// ステータスストア本体
#[derive(Debug)]
pub struct StatusStore<S: StatusStorage> {
    storage: S,
    snapshot: Arc<StatusMap>,
}

impl<S: StatusStorage> StatusStore<S> {
    /// スロットから読み込んで作成
    pub fn load(storage: S) -> Self {
        let map = read_status_map(&storage);
        tracing::debug!(entries = map.len(), "status store loaded");
        Self {
            storage,
            snapshot: Arc::new(map),
        }
    }

    pub fn get(&self, catalog_id: &str, error_index: usize) -> Status {
        resolve_status(&self.snapshot, catalog_id, error_index)
    }

    /// 状態を更新して即座に永続化
    pub fn set(&mut self, catalog_id: &str, error_index: usize, status: Status) {
        Arc::make_mut(&mut self.snapshot).insert(status_key(catalog_id, error_index), status);
        self.persist();
    }

    /// 全エントリを削除
    ///
    /// `confirm` が false を返した場合は何もしない。実行したかどうかを返す。
    pub fn reset_all<F>(&mut self, confirm: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return false;
        }
        self.snapshot = Arc::new(StatusMap::new());
        self.persist();
        true
    }

    /// 現在のマップ（以降の変更の影響を受けない）
    pub fn snapshot(&self) -> Arc<StatusMap> {
        Arc::clone(&self.snapshot)
    }

    pub fn map(&self) -> &StatusMap {
        &self.snapshot
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    fn persist(&self) {
        let payload = match serde_json::to_string(self.snapshot.as_ref()) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("status map serialization failed: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.save(&payload) {
            tracing::warn!("status slot write failed, change kept in memory only: {}", e);
        }
    }
}
