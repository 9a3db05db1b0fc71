//! Core domain logic for the shoplist shopping-list manager.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod repo;
pub mod session;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use repo::item_repo::ItemRepository;
pub use session::list_session::{
    ListSession, Mode, SessionError, SessionResult, SubmitMode, UiState,
};
pub use store::{
    memory_store::MemoryItemStore, sqlite_store::SqliteItemStore, ItemStore, StoreError,
    StoreResult, ITEMS_KEY,
};
pub use view::list_view::{ListView, Row, RowId};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
