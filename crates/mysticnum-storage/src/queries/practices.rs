//! Queries for the practices and practice_history tables.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use mysticnum_core::errors::MysticResult;
use mysticnum_core::models::{Practice, PracticeHistoryEntry, PracticeStatus};

use super::{format_ts, parse_ts};
use crate::to_storage_err;

const COLUMNS: &str = "id, title, description, duration, status, saved_at, completed_at, notes";

/// Whether an active practice shares this title or id.
pub fn active_duplicate_exists(conn: &Connection, id: &str, title: &str) -> MysticResult<bool> {
    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM practices
             WHERE status = 'active' AND (title = ?1 OR id = ?2)",
            params![title, id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n > 0)
}

pub fn insert(conn: &Connection, practice: &Practice) -> MysticResult<()> {
    conn.execute(
        "INSERT INTO practices (id, title, description, duration, status, saved_at, completed_at, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            practice.id,
            practice.title,
            practice.description,
            practice.duration,
            practice.status.as_str(),
            practice.saved_at.as_ref().map(format_ts),
            practice.completed_at.as_ref().map(format_ts),
            practice.notes,
        ],
    )
    .map_err(|e| to_storage_err(format!("insert practice {}: {e}", practice.id)))?;
    Ok(())
}

/// Practices with the given status in save order.
pub fn list_by_status(conn: &Connection, status: PracticeStatus) -> MysticResult<Vec<Practice>> {
    let sql = format!("SELECT {COLUMNS} FROM practices WHERE status = ?1 ORDER BY seq ASC");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![status.as_str()], read_row)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut out = Vec::new();
    for row in rows {
        out.push(decode(row.map_err(|e| to_storage_err(e.to_string()))?)?);
    }
    Ok(out)
}

/// The active practice with this id.
pub fn get_active(conn: &Connection, id: &str) -> MysticResult<Option<Practice>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM practices WHERE status = 'active' AND id = ?1 ORDER BY seq ASC LIMIT 1"
    );
    let row = conn
        .query_row(&sql, params![id], read_row)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(decode).transpose()
}

/// Flip an active practice to completed.
pub fn mark_completed(
    conn: &Connection,
    id: &str,
    completed_at: &DateTime<Utc>,
    notes: &str,
) -> MysticResult<usize> {
    conn.execute(
        "UPDATE practices SET status = 'completed', completed_at = ?2, notes = ?3
         WHERE status = 'active' AND id = ?1",
        params![id, format_ts(completed_at), notes],
    )
    .map_err(|e| to_storage_err(format!("complete practice {id}: {e}")))
}

pub fn delete_active(conn: &Connection, id: &str) -> MysticResult<usize> {
    conn.execute(
        "DELETE FROM practices WHERE status = 'active' AND id = ?1",
        params![id],
    )
    .map_err(|e| to_storage_err(format!("delete practice {id}: {e}")))
}

pub fn insert_history(conn: &Connection, entry: &PracticeHistoryEntry) -> MysticResult<()> {
    conn.execute(
        "INSERT INTO practice_history (practice_id, title, completed_at, notes)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            entry.practice_id,
            entry.title,
            format_ts(&entry.completed_at),
            entry.notes,
        ],
    )
    .map_err(|e| to_storage_err(format!("insert history: {e}")))?;
    Ok(())
}

/// Completion log in append order.
pub fn history(conn: &Connection) -> MysticResult<Vec<PracticeHistoryEntry>> {
    let mut stmt = conn
        .prepare(
            "SELECT practice_id, title, completed_at, notes
             FROM practice_history ORDER BY seq ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut out = Vec::new();
    for row in rows {
        let (practice_id, title, completed_at, notes) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        out.push(PracticeHistoryEntry {
            practice_id,
            title,
            completed_at: parse_ts(&completed_at)?,
            notes,
        });
    }
    Ok(out)
}

struct RawRow {
    id: String,
    title: String,
    description: String,
    duration: Option<String>,
    status: String,
    saved_at: Option<String>,
    completed_at: Option<String>,
    notes: Option<String>,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        duration: row.get(3)?,
        status: row.get(4)?,
        saved_at: row.get(5)?,
        completed_at: row.get(6)?,
        notes: row.get(7)?,
    })
}

fn decode(raw: RawRow) -> MysticResult<Practice> {
    let status = match raw.status.as_str() {
        "completed" => PracticeStatus::Completed,
        _ => PracticeStatus::Active,
    };
    Ok(Practice {
        id: raw.id,
        title: raw.title,
        description: raw.description,
        duration: raw.duration,
        status,
        saved_at: raw.saved_at.as_deref().map(parse_ts).transpose()?,
        completed_at: raw.completed_at.as_deref().map(parse_ts).transpose()?,
        notes: raw.notes,
    })
}
