use serde::{Deserialize, Serialize};

use super::analysis::AnalysisResult;
use super::birth::Gender;
use super::practice::Practice;

/// Everything an exporter renders. Owns a copy so exporters cannot
/// disturb the caller's result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub birth_date: String,
    pub gender: Gender,
    pub analysis: AnalysisResult,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub practices: Vec<Practice>,
}

impl ExportDocument {
    pub fn new(analysis: &AnalysisResult) -> Self {
        Self {
            birth_date: analysis.date.clone(),
            gender: analysis.birth.gender,
            analysis: analysis.clone(),
            practices: Vec::new(),
        }
    }

    pub fn with_practices(mut self, practices: Vec<Practice>) -> Self {
        self.practices = practices;
        self
    }

    /// `15.06.1990` -> `15_06_1990`, used in export file names.
    pub fn file_stem(&self) -> String {
        format!("numerology_{}", self.birth_date.replace('.', "_"))
    }
}
