use chrono::{DateTime, Utc};

use crate::errors::MysticResult;
use crate::models::{
    CalculationRecord, Practice, PracticeHistoryEntry, StoredCalculation, UsageStats,
};

/// Calculation history with a bounded retention window.
pub trait ICalculationStorage: Send + Sync {
    /// Persist a calculation, returning its generated id. Prunes history
    /// down to the most recent `history_limit` records.
    fn save_calculation(&self, record: &CalculationRecord) -> MysticResult<String>;
    fn get_calculation(&self, id: &str) -> MysticResult<Option<StoredCalculation>>;
    /// Newest first.
    fn calculation_history(&self) -> MysticResult<Vec<StoredCalculation>>;
    /// Oldest retained calculation for `birth_date`.
    fn find_calculation_by_date(&self, birth_date: &str)
        -> MysticResult<Option<StoredCalculation>>;
}

/// Saved routines and their completion history.
pub trait IPracticeStorage: Send + Sync {
    /// Returns false when an active practice with the same title or id exists.
    fn save_practice(&self, practice: &Practice) -> MysticResult<bool>;
    fn active_practices(&self) -> MysticResult<Vec<Practice>>;
    fn completed_practices(&self) -> MysticResult<Vec<Practice>>;
    fn practice_history(&self) -> MysticResult<Vec<PracticeHistoryEntry>>;
    /// Returns false when no active practice has this id.
    fn complete_practice(&self, id: &str, notes: &str) -> MysticResult<bool>;
    fn delete_practice(&self, id: &str) -> MysticResult<()>;
    fn stats(&self, now: DateTime<Utc>) -> MysticResult<UsageStats>;
}
