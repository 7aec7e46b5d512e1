//! Compiled defaults for every configuration field.

pub const DEFAULT_DB_PATH: &str = "mysticnum.db";
/// Calculation history retention cap.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
pub const DEFAULT_MAX_RESULTS: usize = 20;

pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_MAX_INTERPRETATION_CHARS: usize = 1000;
pub const DEFAULT_MAX_PRACTICES: usize = 10;

/// Filter directive used when `MYSTICNUM_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "mysticnum=info";

/// Project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "mysticnum.toml";
