//! [`MatrixEngine`]: the full date-to-analysis pipeline.

use mysticnum_core::errors::InvalidDateError;
use mysticnum_core::models::{AnalysisResult, FrequencyMatrix, Gender};
use mysticnum_core::traits::KnowledgeSource;

use crate::derive::{build_sequence, derive_numbers, digit_sum};
use crate::interpret::{interpret_positions, task_text};
use crate::parse::parse_date;
use crate::rules;

/// Stateless matrix engine. Holds nothing between calls, so one value can be
/// shared freely or a fresh one built per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixEngine;

impl MatrixEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full analysis for a `DD.MM.YYYY` date.
    ///
    /// The only failure is an invalid date; every later stage is total.
    pub fn compute<K>(
        &self,
        date_str: &str,
        gender: Gender,
        knowledge: &K,
    ) -> Result<AnalysisResult, InvalidDateError>
    where
        K: KnowledgeSource + ?Sized,
    {
        let span = mysticnum_core::compute_span!(date_str, gender);
        let _guard = span.enter();

        let parsed = parse_date(date_str, gender).inspect_err(|e| {
            tracing::debug!(error = %e, "date rejected");
        })?;
        let record = parsed.record;

        let derived = derive_numbers(&parsed.digits, record.year);
        tracing::debug!(
            first = derived.first,
            second = derived.second,
            third = derived.third,
            fourth = derived.fourth,
            "derived numbers"
        );

        let sequence = build_sequence(&parsed.digits, &derived, record.year);
        let matrix = FrequencyMatrix::tabulate(sequence.as_slice());
        tracing::debug!(digits = sequence.len(), zeros = matrix.zeros(), "matrix tabulated");

        let personal_task = task_text(knowledge, derived.second);
        let ancestral_task = task_text(knowledge, derived.fourth);
        let interpretations = interpret_positions(knowledge, &matrix, gender);

        let ancestral_programs = rules::ancestral_programs(&matrix);
        let warnings = rules::warnings(&matrix, record.year);
        tracing::debug!(
            programs = ancestral_programs.len(),
            warnings = warnings.len(),
            "rules evaluated"
        );

        let birth_number = if record.day <= 9 {
            record.day
        } else {
            digit_sum(i64::from(record.day))
        };
        let life_path = digit_sum(i64::from(record.day + record.month + record.year));

        Ok(AnalysisResult {
            date: date_str.to_string(),
            birth: record,
            derived,
            digit_sequence: sequence.into_vec(),
            matrix,
            personal_task,
            ancestral_task,
            interpretations,
            ancestral_programs,
            warnings,
            birth_number,
            life_path,
        })
    }
}
