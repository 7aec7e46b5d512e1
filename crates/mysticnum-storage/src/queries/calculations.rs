//! Queries for the calculations table.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use mysticnum_core::errors::{MysticResult, StorageError};
use mysticnum_core::models::{AnalysisResult, CalculationRecord, Gender, StoredCalculation};

use super::{format_ts, parse_ts};
use crate::to_storage_err;

const COLUMNS: &str = "id, birth_date, gender, payload, fingerprint, created_at";

/// blake3 hex digest of a serialized payload.
pub fn fingerprint(payload: &str) -> String {
    blake3::hash(payload.as_bytes()).to_hex().to_string()
}

/// Serialize and insert a record under `id`.
pub fn insert(
    conn: &Connection,
    id: &str,
    record: &CalculationRecord,
    created_at: &DateTime<Utc>,
) -> MysticResult<()> {
    let payload = serde_json::to_string(&record.result)?;
    let digest = fingerprint(&payload);
    conn.execute(
        "INSERT INTO calculations (id, birth_date, gender, payload, fingerprint, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            id,
            record.birth_date,
            record.gender.as_str(),
            payload,
            digest,
            format_ts(created_at),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert calculation: {e}")))?;
    Ok(())
}

/// Insert an already stored calculation as-is (backup restore).
pub fn insert_stored(conn: &Connection, calc: &StoredCalculation) -> MysticResult<()> {
    let payload = serde_json::to_string(&calc.result)?;
    conn.execute(
        "INSERT INTO calculations (id, birth_date, gender, payload, fingerprint, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            calc.id,
            calc.birth_date,
            calc.gender.as_str(),
            payload,
            calc.fingerprint,
            format_ts(&calc.timestamp),
        ],
    )
    .map_err(|e| to_storage_err(format!("restore calculation {}: {e}", calc.id)))?;
    Ok(())
}

/// Delete all but the newest `keep` rows. Returns the number removed.
pub fn prune(conn: &Connection, keep: usize) -> MysticResult<usize> {
    let keep = i64::try_from(keep).unwrap_or(i64::MAX);
    conn.execute(
        "DELETE FROM calculations WHERE seq NOT IN (
            SELECT seq FROM calculations ORDER BY seq DESC LIMIT ?1
        )",
        params![keep],
    )
    .map_err(|e| to_storage_err(format!("prune calculations: {e}")))
}

pub fn get(conn: &Connection, id: &str) -> MysticResult<Option<StoredCalculation>> {
    let sql = format!("SELECT {COLUMNS} FROM calculations WHERE id = ?1");
    let row = conn
        .query_row(&sql, params![id], read_row)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(decode).transpose()
}

/// Every row, newest first.
pub fn history(conn: &Connection) -> MysticResult<Vec<StoredCalculation>> {
    let sql = format!("SELECT {COLUMNS} FROM calculations ORDER BY seq DESC");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], read_row)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut out = Vec::new();
    for row in rows {
        out.push(decode(row.map_err(|e| to_storage_err(e.to_string()))?)?);
    }
    Ok(out)
}

/// Oldest retained row for a birth date.
pub fn oldest_by_birth_date(
    conn: &Connection,
    birth_date: &str,
) -> MysticResult<Option<StoredCalculation>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM calculations WHERE birth_date = ?1 ORDER BY seq ASC LIMIT 1"
    );
    let row = conn
        .query_row(&sql, params![birth_date], read_row)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(decode).transpose()
}

pub fn count(conn: &Connection) -> MysticResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM calculations", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n as usize)
}

struct RawRow {
    id: String,
    birth_date: String,
    gender: String,
    payload: String,
    fingerprint: String,
    created_at: String,
}

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        birth_date: row.get(1)?,
        gender: row.get(2)?,
        payload: row.get(3)?,
        fingerprint: row.get(4)?,
        created_at: row.get(5)?,
    })
}

fn decode(raw: RawRow) -> MysticResult<StoredCalculation> {
    let corrupt = |reason: String| StorageError::CorruptPayload {
        id: raw.id.clone(),
        reason,
    };
    let result: AnalysisResult =
        serde_json::from_str(&raw.payload).map_err(|e| corrupt(e.to_string()))?;
    let gender: Gender = raw.gender.parse().map_err(|e| corrupt(format!("{e}")))?;
    let timestamp = parse_ts(&raw.created_at)?;
    Ok(StoredCalculation {
        id: raw.id,
        birth_date: raw.birth_date,
        gender,
        result,
        fingerprint: raw.fingerprint,
        timestamp,
    })
}
