//! Key/value rows in the profile table.

use rusqlite::{params, Connection, OptionalExtension};

use mysticnum_core::errors::MysticResult;

use crate::to_storage_err;

pub const SETTINGS_KEY: &str = "settings";
pub const USER_ID_KEY: &str = "user_id";

pub fn get(conn: &Connection, key: &str) -> MysticResult<Option<String>> {
    conn.query_row(
        "SELECT value FROM profile WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn put(conn: &Connection, key: &str, value: &str) -> MysticResult<()> {
    conn.execute(
        "INSERT INTO profile (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )
    .map_err(|e| to_storage_err(format!("write profile {key}: {e}")))?;
    Ok(())
}
