use serde::{Deserialize, Serialize};

/// The derived numbers of a birth date.
///
/// For births before 2000 the ordered sequence is `(first, second, third, fourth)`.
/// From 2000 on the literal 19 sits between `second` and `third`, giving
/// `(first, second, 19, third, fourth)`. Both shapes feed the digit sequence
/// in exactly that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedNumbers {
    /// Sum of the eight date digits.
    pub first: u32,
    /// One-pass digit-sum of `first` ("personal task").
    pub second: u32,
    /// The literal 19 inserted for births from 2000 on.
    pub addend: Option<u32>,
    /// `first + 19` from 2000 on, otherwise `first - 2 * first non-zero digit`.
    pub third: i64,
    /// One-pass digit-sum of `third` ("ancestral task").
    pub fourth: u32,
}

impl DerivedNumbers {
    /// The derived entries in digit-sequence order.
    pub fn sequence(&self) -> Vec<i64> {
        let mut seq = vec![i64::from(self.first), i64::from(self.second)];
        if let Some(addend) = self.addend {
            seq.push(i64::from(addend));
        }
        seq.push(self.third);
        seq.push(i64::from(self.fourth));
        seq
    }
}
