use serde::{Deserialize, Serialize};

use super::defaults;

/// SQLite persistence configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file path.
    pub db_path: String,
    /// Most-recent calculations kept; older ones are pruned on save.
    pub history_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_DB_PATH.to_string(),
            history_limit: defaults::DEFAULT_HISTORY_LIMIT,
        }
    }
}
