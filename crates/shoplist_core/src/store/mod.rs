//! Item storage adapters and persistence contracts.
//!
//! # Responsibility
//! - Define the key-value persistence boundary for the item list.
//! - Encode/decode the item sequence as a JSON array of strings.
//!
//! # Invariants
//! - The whole item list is stored under the single key [`ITEMS_KEY`].
//! - An absent value loads as an empty sequence.
//! - A malformed persisted value loads as an empty sequence (recovered
//!   locally and logged; never surfaced to callers as an error).

use crate::db::DbError;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory_store;
pub mod sqlite_store;

/// Storage key holding the serialized item list.
pub const ITEMS_KEY: &str = "items";

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for persistence and serialization failures.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(message) => write!(f, "failed to serialize item list: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence boundary for the item list.
///
/// Implementations hold exactly one value: the full, ordered item sequence.
/// The repository layer is written against this trait so tests can inject
/// [`memory_store::MemoryItemStore`] instead of a real database.
pub trait ItemStore {
    /// Returns the persisted item sequence, or an empty sequence when no
    /// value exists yet or the stored payload fails to parse.
    fn load(&self) -> StoreResult<Vec<String>>;

    /// Serializes and persists the full sequence, overwriting any prior value.
    fn save(&self, items: &[String]) -> StoreResult<()>;

    /// Removes the persisted value entirely.
    fn clear(&self) -> StoreResult<()>;
}

/// Encodes the item sequence as a JSON array of strings.
pub(crate) fn encode_items(items: &[String]) -> StoreResult<String> {
    serde_json::to_string(items).map_err(|err| StoreError::Serialize(err.to_string()))
}

/// Decodes a persisted payload, treating malformed data as absent.
pub(crate) fn decode_items(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(items) => items,
        Err(err) => {
            warn!(
                "event=items_decode module=store status=recovered reason=malformed_payload error={err}"
            );
            Vec::new()
        }
    }
}
