//! # mysticnum-storage
//!
//! SQLite persistence for calculation history, saved practices, settings and
//! backups. One serialized connection; schema versioned through
//! `PRAGMA user_version`.

pub mod engine;
pub mod migrations;
pub mod pragmas;
pub mod queries;

pub use engine::StorageEngine;

use mysticnum_core::errors::{MysticError, StorageError};

/// Wrap a message as a storage-layer [`MysticError`].
pub(crate) fn to_storage_err(message: impl Into<String>) -> MysticError {
    MysticError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
