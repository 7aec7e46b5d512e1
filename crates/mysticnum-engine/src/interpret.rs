//! Interpretation lookup against the task and matrix tables.

use std::collections::BTreeMap;

use mysticnum_core::constants::{EMPTY_CELL, MATRIX_POSITIONS, MAX_KEY_REPEATS, NO_DATA};
use mysticnum_core::models::{DigitInterpretation, FrequencyMatrix, Gender};
use mysticnum_core::traits::KnowledgeSource;

/// Task text for a derived number, or the "no data" marker.
pub fn task_text<K>(knowledge: &K, number: u32) -> String
where
    K: KnowledgeSource + ?Sized,
{
    knowledge
        .task(&number.to_string())
        .unwrap_or(NO_DATA)
        .to_string()
}

/// Matrix-table key for a position: `"{pos}0"` when empty, otherwise the
/// digit repeated `count` times, capped at five repeats.
pub fn matrix_key(position: u8, count: u32) -> String {
    if count == 0 {
        format!("{position}0")
    } else {
        position.to_string().repeat(count.min(MAX_KEY_REPEATS) as usize)
    }
}

/// Resolve every position that has a table entry. Positions without an
/// entry are left out rather than filled with a fallback.
pub fn interpret_positions<K>(
    knowledge: &K,
    matrix: &FrequencyMatrix,
    gender: Gender,
) -> BTreeMap<u8, DigitInterpretation>
where
    K: KnowledgeSource + ?Sized,
{
    let mut out = BTreeMap::new();
    for position in MATRIX_POSITIONS {
        let count = matrix.count(position);
        let key = matrix_key(position, count);
        let Some(entry) = knowledge.matrix(&key) else {
            tracing::debug!(position, key = %key, "no matrix interpretation");
            continue;
        };
        let value = if count > 0 {
            position.to_string().repeat(count as usize)
        } else {
            EMPTY_CELL.to_string()
        };
        out.insert(
            position,
            DigitInterpretation {
                position,
                count,
                key,
                value,
                text: entry.resolve(gender).to_string(),
            },
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::matrix_key;

    #[test]
    fn keys_cap_at_five_repeats() {
        assert_eq!(matrix_key(4, 0), "40");
        assert_eq!(matrix_key(4, 3), "444");
        assert_eq!(matrix_key(1, 5), "11111");
        assert_eq!(matrix_key(1, 7), "11111");
    }
}
