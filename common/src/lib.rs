//! Errori Checker Common Library
//!
//! CLIと対話レビューで共有される型とコアロジック

pub mod types;
pub mod error;
pub mod status_store;
pub mod view;
pub mod export;

pub use types::{status_key, CatalogEntry, RawRow, Status};
pub use error::{Error, Result};
pub use status_store::{
    resolve_status, MemoryStorage, StatusMap, StatusStorage, StatusStore, STORAGE_KEY,
};
pub use view::{
    aggregate_progress, catalog_progress, filter_catalogs, find_catalog, navigation_index,
    paginate, AggregateProgress, Page, Progress, Selection, StatusFilter,
};
