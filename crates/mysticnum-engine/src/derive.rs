//! Derived numbers and the digit sequence built from them.

use mysticnum_core::constants::{EXTRA_NINE_YEAR, MILLENNIUM_ADDEND, MILLENNIUM_YEAR};
use mysticnum_core::models::{DerivedNumbers, DigitSequence};

/// One pass of summing the decimal digits of `|n|`. Not reduced further:
/// `digit_sum(29) == 11`.
pub fn digit_sum(n: i64) -> u32 {
    let mut value = n.unsigned_abs();
    let mut sum = 0u32;
    while value > 0 {
        sum += (value % 10) as u32;
        value /= 10;
    }
    sum
}

/// Repeated digit-sum until the value is at most 9.
pub fn reduce_to_single(n: u32) -> u32 {
    let mut value = n;
    while value > 9 {
        value = digit_sum(i64::from(value));
    }
    value
}

/// Compute the derived numbers from the eight date digits.
pub fn derive_numbers(date_digits: &[u8; 8], year: u32) -> DerivedNumbers {
    let first: u32 = date_digits.iter().map(|&d| u32::from(d)).sum();
    let second = digit_sum(i64::from(first));

    let (addend, third) = if year >= MILLENNIUM_YEAR {
        (
            Some(MILLENNIUM_ADDEND),
            i64::from(first) + i64::from(MILLENNIUM_ADDEND),
        )
    } else {
        // Years 1900..=1999 always contain a non-zero digit.
        let first_digit = date_digits.iter().copied().find(|&d| d != 0).unwrap_or(0);
        (None, i64::from(first) - 2 * i64::from(first_digit))
    };
    let fourth = digit_sum(third);

    DerivedNumbers {
        first,
        second,
        addend,
        third,
        fourth,
    }
}

/// Date digits, then the digits of every derived entry in order, then one
/// extra 9 for births from 2020 on.
pub fn build_sequence(date_digits: &[u8; 8], derived: &DerivedNumbers, year: u32) -> DigitSequence {
    let mut seq = DigitSequence::new();
    for &d in date_digits {
        seq.push_digit(d);
    }
    for n in derived.sequence() {
        seq.push_number(n);
    }
    if year >= EXTRA_NINE_YEAR {
        seq.push_digit(9);
    }
    seq
}
