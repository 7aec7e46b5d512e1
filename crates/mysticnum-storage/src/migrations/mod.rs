//! Numbered schema migrations tracked in `PRAGMA user_version`.

pub mod v001_initial;
pub mod v002_settings;

use rusqlite::Connection;

use mysticnum_core::errors::{MysticResult, StorageError};

/// Every migration in apply order.
const MIGRATIONS: &[(u32, &str)] = &[
    (1, v001_initial::MIGRATION_SQL),
    (2, v002_settings::MIGRATION_SQL),
];

/// Latest schema version.
pub const LATEST_VERSION: u32 = 2;

/// Current `user_version` of the database.
pub fn current_version(conn: &Connection) -> MysticResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| crate::to_storage_err(e.to_string()))
}

/// Apply every migration newer than the stored version, each in its own
/// transaction together with the version bump.
pub fn run_migrations(conn: &Connection) -> MysticResult<u32> {
    let start = current_version(conn)?;
    let mut version = start;
    for &(target, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > start) {
        apply(conn, target, sql).map_err(|reason| StorageError::MigrationFailed {
            version: target,
            reason,
        })?;
        tracing::debug!(version = target, "migration applied");
        version = target;
    }
    Ok(version)
}

fn apply(conn: &Connection, version: u32, sql: &str) -> Result<(), String> {
    let tx = conn.unchecked_transaction().map_err(|e| e.to_string())?;
    tx.execute_batch(sql).map_err(|e| e.to_string())?;
    tx.pragma_update(None, "user_version", version)
        .map_err(|e| e.to_string())?;
    tx.commit().map_err(|e| e.to_string())
}
