use serde::{Deserialize, Serialize};

/// Category of an ancestral-program flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramKind {
    Warning,
    Power,
    Critical,
    Talent,
}

/// Severity of a warning flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    Info,
    Warning,
    Critical,
}

/// A rule-triggered lineage pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramFlag {
    pub kind: ProgramKind,
    pub title: String,
    pub description: String,
}

/// A rule-triggered notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningFlag {
    pub level: WarningLevel,
    pub title: String,
    pub description: String,
}
