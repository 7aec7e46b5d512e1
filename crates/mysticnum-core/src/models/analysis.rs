use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::birth::BirthRecord;
use super::derived::DerivedNumbers;
use super::flags::{ProgramFlag, WarningFlag};
use super::interpretation::DigitInterpretation;
use super::matrix::FrequencyMatrix;

/// Complete, immutable output of one matrix computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Source date string as given.
    pub date: String,
    pub birth: BirthRecord,
    pub derived: DerivedNumbers,
    /// Diagnostic: the full digit sequence that was tabulated.
    pub digit_sequence: Vec<u8>,
    pub matrix: FrequencyMatrix,
    pub personal_task: String,
    pub ancestral_task: String,
    /// Positions with no table entry are absent.
    pub interpretations: BTreeMap<u8, DigitInterpretation>,
    pub ancestral_programs: Vec<ProgramFlag>,
    pub warnings: Vec<WarningFlag>,
    pub birth_number: u32,
    pub life_path: u32,
}
