//! V001: calculations, practices, practice_history.

pub const MIGRATION_SQL: &str = r#"
-- Calculation history. `seq` orders rows by insertion; retention keeps the
-- highest `seq` values.
CREATE TABLE IF NOT EXISTS calculations (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL UNIQUE,
    birth_date TEXT NOT NULL,
    gender TEXT NOT NULL,
    payload TEXT NOT NULL,
    fingerprint TEXT NOT NULL,
    created_at TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_calculations_birth_date
    ON calculations(birth_date);

-- Saved practices. The same id may appear once active and again completed.
CREATE TABLE IF NOT EXISTS practices (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    id TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    duration TEXT,
    status TEXT NOT NULL DEFAULT 'active',
    saved_at TEXT,
    completed_at TEXT,
    notes TEXT
) STRICT;

CREATE INDEX IF NOT EXISTS idx_practices_status
    ON practices(status);

-- Append-only completion log.
CREATE TABLE IF NOT EXISTS practice_history (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    practice_id TEXT NOT NULL,
    title TEXT NOT NULL,
    completed_at TEXT NOT NULL,
    notes TEXT NOT NULL DEFAULT ''
) STRICT;
"#;
