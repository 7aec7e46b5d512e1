use serde::{Deserialize, Serialize};

/// Append-only sequence of decimal digits (0–9) fed to the frequency tabulation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DigitSequence(Vec<u8>);

impl DigitSequence {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append one digit. Values above 9 are reduced modulo 10.
    pub fn push_digit(&mut self, digit: u8) {
        self.0.push(digit % 10);
    }

    /// Append the decimal digits of `|n|`, most significant first.
    pub fn push_number(&mut self, n: i64) {
        let start = self.0.len();
        let mut value = n.unsigned_abs();
        loop {
            self.0.push((value % 10) as u8);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        self.0[start..].reverse();
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}
