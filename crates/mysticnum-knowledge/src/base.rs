//! [`KnowledgeBase`]: read-only lookup tables keyed by string patterns.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use mysticnum_core::errors::KnowledgeError;
use mysticnum_core::models::{Interpretation, KnowledgeStats};
use mysticnum_core::traits::KnowledgeSource;

/// Tables compiled into the binary.
pub const BUNDLED_TABLES: &str = include_str!("../data/knowledge.json");

/// The three interpretation tables. Missing sections load as empty;
/// unknown top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBase {
    pub(crate) tasks: BTreeMap<String, String>,
    pub(crate) matrix: BTreeMap<String, Interpretation>,
    pub(crate) vibrations: BTreeMap<String, String>,
}

impl KnowledgeBase {
    /// The bundled tables.
    pub fn bundled() -> Result<Self, KnowledgeError> {
        Self::parse(BUNDLED_TABLES, "<bundled>")
    }

    pub fn from_json_str(json: &str) -> Result<Self, KnowledgeError> {
        Self::parse(json, "<string>")
    }

    pub fn from_path(path: &Path) -> Result<Self, KnowledgeError> {
        let content = std::fs::read_to_string(path).map_err(|e| KnowledgeError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Load from `path` when given, otherwise the bundled tables.
    pub fn load(path: Option<&Path>) -> Result<Self, KnowledgeError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::bundled(),
        }
    }

    fn parse(json: &str, source_name: &str) -> Result<Self, KnowledgeError> {
        let kb: Self = serde_json::from_str(json).map_err(|e| KnowledgeError::ParseError {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(
            source = source_name,
            tasks = kb.tasks.len(),
            matrix = kb.matrix.len(),
            vibrations = kb.vibrations.len(),
            "knowledge tables loaded"
        );
        Ok(kb)
    }

    pub fn stats(&self) -> KnowledgeStats {
        KnowledgeStats {
            tasks: self.tasks.len(),
            matrix: self.matrix.len(),
            vibrations: self.vibrations.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.matrix.is_empty() && self.vibrations.is_empty()
    }
}

impl KnowledgeSource for KnowledgeBase {
    fn task(&self, key: &str) -> Option<&str> {
        self.tasks.get(key).map(String::as_str)
    }

    fn matrix(&self, key: &str) -> Option<&Interpretation> {
        self.matrix.get(key)
    }

    fn vibration(&self, key: &str) -> Option<&str> {
        self.vibrations.get(key).map(String::as_str)
    }
}
