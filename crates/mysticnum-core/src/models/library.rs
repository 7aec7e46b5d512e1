use serde::{Deserialize, Serialize};

/// Section of the knowledge table an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeSection {
    Tasks,
    Matrix,
    Vibrations,
}

/// One library search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryHit {
    pub section: KnowledgeSection,
    pub key: String,
    /// First 150 characters of the entry text.
    pub snippet: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeStats {
    pub tasks: usize,
    pub matrix: usize,
    pub vibrations: usize,
}
