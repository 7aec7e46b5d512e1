//! V002: key/value profile table for settings and the user id.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS profile (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
) STRICT;
"#;
