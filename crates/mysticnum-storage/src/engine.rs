//! StorageEngine: owns the serialized connection and implements the
//! calculation and practice storage traits.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Datelike, Utc};
use rusqlite::Connection;
use uuid::Uuid;

use mysticnum_core::config::StorageConfig;
use mysticnum_core::config::defaults::DEFAULT_HISTORY_LIMIT;
use mysticnum_core::errors::{MysticResult, StorageError};
use mysticnum_core::models::{
    Backup, CalculationRecord, Practice, PracticeHistoryEntry, PracticeStatus, Settings,
    StoredCalculation, UsageStats,
};
use mysticnum_core::traits::{ICalculationStorage, IPracticeStorage};

use crate::migrations;
use crate::pragmas::apply_pragmas;
use crate::queries::{calculations, practices, profile};
use crate::to_storage_err;

/// SQLite-backed store. All access goes through one mutex-guarded connection.
pub struct StorageEngine {
    conn: Mutex<Connection>,
    history_limit: usize,
}

impl StorageEngine {
    /// Open (or create) a database file.
    pub fn open(path: &Path) -> MysticResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| to_storage_err(format!("open {}: {e}", path.display())))?;
        Self::initialize(conn)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> MysticResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::initialize(conn)
    }

    /// Open the configured database file with the configured retention.
    pub fn from_config(config: &StorageConfig) -> MysticResult<Self> {
        Ok(Self::open(Path::new(&config.db_path))?.with_history_limit(config.history_limit))
    }

    /// Keep at most `limit` calculations (minimum 1).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    fn initialize(conn: Connection) -> MysticResult<Self> {
        apply_pragmas(&conn)?;
        let version = migrations::run_migrations(&conn)?;
        tracing::debug!(schema_version = version, "storage ready");
        Ok(Self {
            conn: Mutex::new(conn),
            history_limit: DEFAULT_HISTORY_LIMIT,
        })
    }

    fn with_conn<F, T>(&self, f: F) -> MysticResult<T>
    where
        F: FnOnce(&Connection) -> MysticResult<T>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::LockPoisoned)?;
        f(&guard)
    }

    /// Run `f` inside a transaction, rolling back on error.
    fn with_tx<F, T>(&self, op: &str, f: F) -> MysticResult<T>
    where
        F: FnOnce(&Connection) -> MysticResult<T>,
    {
        self.with_conn(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(format!("{op} begin: {e}")))?;
            match f(&tx) {
                Ok(value) => {
                    tx.commit()
                        .map_err(|e| to_storage_err(format!("{op} commit: {e}")))?;
                    Ok(value)
                }
                Err(e) => {
                    let _ = tx.rollback();
                    Err(e)
                }
            }
        })
    }

    pub fn settings(&self) -> MysticResult<Settings> {
        self.with_conn(|conn| match profile::get(conn, profile::SETTINGS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Settings::default()),
        })
    }

    pub fn update_settings(&self, settings: &Settings) -> MysticResult<()> {
        let raw = serde_json::to_string(settings)?;
        self.with_conn(|conn| profile::put(conn, profile::SETTINGS_KEY, &raw))
    }

    /// Stable anonymous user id, generated on first call.
    pub fn user_id(&self) -> MysticResult<String> {
        self.with_conn(|conn| {
            if let Some(id) = profile::get(conn, profile::USER_ID_KEY)? {
                return Ok(id);
            }
            let id = format!("user_{}", Uuid::new_v4().simple());
            profile::put(conn, profile::USER_ID_KEY, &id)?;
            Ok(id)
        })
    }

    /// Dump everything.
    pub fn export_backup(&self) -> MysticResult<Backup> {
        let _span = mysticnum_core::storage_span!("export_backup").entered();
        Ok(Backup {
            user_id: self.user_id()?,
            settings: self.settings()?,
            calculations: self.calculation_history()?,
            active_practices: self.active_practices()?,
            completed_practices: self.completed_practices()?,
            practice_history: self.practice_history()?,
        })
    }

    /// Replace all stored data with the backup contents in one transaction.
    pub fn import_backup(&self, backup: &Backup) -> MysticResult<()> {
        let _span = mysticnum_core::storage_span!("import_backup").entered();
        let settings = serde_json::to_string(&backup.settings)?;
        let limit = self.history_limit;
        let pruned = self.with_tx("import_backup", |conn| {
            clear_tables(conn)?;
            // History is newest first; insert oldest first to keep the order.
            for calc in backup.calculations.iter().rev() {
                calculations::insert_stored(conn, calc)?;
            }
            let pruned = calculations::prune(conn, limit)?;
            for practice in backup
                .active_practices
                .iter()
                .chain(&backup.completed_practices)
            {
                practices::insert(conn, practice)?;
            }
            for entry in &backup.practice_history {
                practices::insert_history(conn, entry)?;
            }
            profile::put(conn, profile::SETTINGS_KEY, &settings)?;
            profile::put(conn, profile::USER_ID_KEY, &backup.user_id)?;
            Ok(pruned)
        })?;
        if pruned > 0 {
            tracing::info!(pruned, limit, "calculation history pruned");
        }
        tracing::info!(
            calculations = backup.calculations.len(),
            practices = backup.active_practices.len() + backup.completed_practices.len(),
            "backup imported"
        );
        Ok(())
    }

    /// Delete calculations, practices, history and profile rows.
    pub fn clear_all(&self) -> MysticResult<()> {
        self.with_tx("clear_all", |conn| {
            clear_tables(conn)?;
            conn.execute("DELETE FROM profile", [])
                .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(())
        })?;
        tracing::info!("all stored data cleared");
        Ok(())
    }
}

fn clear_tables(conn: &Connection) -> MysticResult<()> {
    conn.execute_batch(
        "
        DELETE FROM calculations;
        DELETE FROM practices;
        DELETE FROM practice_history;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

impl ICalculationStorage for StorageEngine {
    fn save_calculation(&self, record: &CalculationRecord) -> MysticResult<String> {
        let _span = mysticnum_core::storage_span!("save_calculation").entered();
        let id = format!("calc_{}", Uuid::new_v4().simple());
        let now = Utc::now();
        let limit = self.history_limit;
        let pruned = self.with_tx("save_calculation", |conn| {
            calculations::insert(conn, &id, record, &now)?;
            calculations::prune(conn, limit)
        })?;
        if pruned > 0 {
            tracing::info!(pruned, limit, "calculation history pruned");
        }
        Ok(id)
    }

    fn get_calculation(&self, id: &str) -> MysticResult<Option<StoredCalculation>> {
        self.with_conn(|conn| calculations::get(conn, id))
    }

    fn calculation_history(&self) -> MysticResult<Vec<StoredCalculation>> {
        self.with_conn(calculations::history)
    }

    fn find_calculation_by_date(
        &self,
        birth_date: &str,
    ) -> MysticResult<Option<StoredCalculation>> {
        self.with_conn(|conn| calculations::oldest_by_birth_date(conn, birth_date))
    }
}

impl IPracticeStorage for StorageEngine {
    fn save_practice(&self, practice: &Practice) -> MysticResult<bool> {
        let mut practice = practice.clone();
        if practice.id.is_empty() {
            practice.id = format!("practice_{}", Uuid::new_v4().simple());
        }
        practice.status = PracticeStatus::Active;
        practice.saved_at = Some(Utc::now());
        practice.completed_at = None;

        self.with_tx("save_practice", |conn| {
            if practices::active_duplicate_exists(conn, &practice.id, &practice.title)? {
                tracing::debug!(id = %practice.id, title = %practice.title, "duplicate practice rejected");
                return Ok(false);
            }
            practices::insert(conn, &practice)?;
            Ok(true)
        })
    }

    fn active_practices(&self) -> MysticResult<Vec<Practice>> {
        self.with_conn(|conn| practices::list_by_status(conn, PracticeStatus::Active))
    }

    fn completed_practices(&self) -> MysticResult<Vec<Practice>> {
        self.with_conn(|conn| practices::list_by_status(conn, PracticeStatus::Completed))
    }

    fn practice_history(&self) -> MysticResult<Vec<PracticeHistoryEntry>> {
        self.with_conn(practices::history)
    }

    fn complete_practice(&self, id: &str, notes: &str) -> MysticResult<bool> {
        let now = Utc::now();
        self.with_tx("complete_practice", |conn| {
            let Some(practice) = practices::get_active(conn, id)? else {
                return Ok(false);
            };
            practices::mark_completed(conn, id, &now, notes)?;
            practices::insert_history(
                conn,
                &PracticeHistoryEntry {
                    practice_id: practice.id,
                    title: practice.title,
                    completed_at: now,
                    notes: notes.to_string(),
                },
            )?;
            Ok(true)
        })
    }

    fn delete_practice(&self, id: &str) -> MysticResult<()> {
        self.with_conn(|conn| practices::delete_active(conn, id))?;
        Ok(())
    }

    fn stats(&self, now: DateTime<Utc>) -> MysticResult<UsageStats> {
        self.with_conn(|conn| {
            let active = practices::list_by_status(conn, PracticeStatus::Active)?;
            let completed = practices::list_by_status(conn, PracticeStatus::Completed)?;
            let this_month = practices::history(conn)?
                .iter()
                .filter(|entry| {
                    entry.completed_at.year() == now.year()
                        && entry.completed_at.month() == now.month()
                })
                .count();
            Ok(UsageStats {
                total_practices: active.len(),
                completed_practices: completed.len(),
                total_calculations: calculations::count(conn)?,
                practices_this_month: this_month,
            })
        })
    }
}
