use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::AnalysisResult;
use super::birth::Gender;
use super::practice::{Practice, PracticeHistoryEntry};
use super::settings::Settings;

/// A calculation handed to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub birth_date: String,
    pub gender: Gender,
    pub result: AnalysisResult,
}

impl CalculationRecord {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            birth_date: result.date.clone(),
            gender: result.birth.gender,
            result: result.clone(),
        }
    }
}

/// A persisted calculation with its storage-assigned identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCalculation {
    pub id: String,
    pub birth_date: String,
    pub gender: Gender,
    pub result: AnalysisResult,
    /// blake3 hex digest of the serialized result.
    pub fingerprint: String,
    pub timestamp: DateTime<Utc>,
}

/// Usage counters over the stored data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub total_practices: usize,
    pub completed_practices: usize,
    pub total_calculations: usize,
    pub practices_this_month: usize,
}

/// Full data dump for backup and restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub user_id: String,
    pub settings: Settings,
    pub calculations: Vec<StoredCalculation>,
    pub active_practices: Vec<Practice>,
    pub completed_practices: Vec<Practice>,
    pub practice_history: Vec<PracticeHistoryEntry>,
}
