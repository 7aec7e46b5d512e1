use serde::{Deserialize, Serialize};

use super::defaults;

/// Where the interpretation tables come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// JSON file replacing the bundled tables. `None` uses the bundled ones.
    pub tables_path: Option<String>,
}

/// Library (substring search) limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Queries shorter than this (in characters) return nothing.
    pub min_query_len: usize,
    pub max_results: usize,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            min_query_len: defaults::DEFAULT_MIN_QUERY_LEN,
            max_results: defaults::DEFAULT_MAX_RESULTS,
        }
    }
}
