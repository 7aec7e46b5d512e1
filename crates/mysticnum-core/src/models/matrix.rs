use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{EMPTY_CELL, MATRIX_POSITIONS};

/// Digit-frequency table over positions 1..=9.
///
/// `counts` is authoritative for every rule; `cells` is the display rendering
/// (`"444"` for three fours, `"—"` when empty). Zeros are counted for
/// diagnostics only and never occupy a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyMatrix {
    counts: [u32; 10],
    cells: BTreeMap<u8, String>,
}

impl FrequencyMatrix {
    /// Tabulate a digit slice. Values outside 0..=9 are ignored.
    pub fn tabulate(digits: &[u8]) -> Self {
        let mut counts = [0u32; 10];
        for &d in digits {
            if let Some(slot) = counts.get_mut(usize::from(d)) {
                *slot += 1;
            }
        }
        let cells = MATRIX_POSITIONS
            .map(|pos| (pos, render_cell(pos, counts[usize::from(pos)])))
            .collect();
        Self { counts, cells }
    }

    /// Occurrences of `digit` (0..=9). Out-of-range digits count as 0.
    pub fn count(&self, digit: u8) -> u32 {
        self.counts.get(usize::from(digit)).copied().unwrap_or(0)
    }

    /// Rendered cell for a position, `"—"` for unknown positions.
    pub fn cell(&self, position: u8) -> &str {
        self.cells
            .get(&position)
            .map(String::as_str)
            .unwrap_or(EMPTY_CELL)
    }

    pub fn cells(&self) -> &BTreeMap<u8, String> {
        &self.cells
    }

    /// Occurrences of 0, which has no matrix position.
    pub fn zeros(&self) -> u32 {
        self.counts[0]
    }

    /// Sum of counts over 0..=9, equal to the tabulated sequence length.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

fn render_cell(position: u8, count: u32) -> String {
    if count == 0 {
        EMPTY_CELL.to_string()
    } else {
        position.to_string().repeat(count as usize)
    }
}
