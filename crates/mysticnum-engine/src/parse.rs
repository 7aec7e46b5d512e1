//! Strict `DD.MM.YYYY` parsing and date-digit extraction.

use std::sync::LazyLock;

use regex::Regex;

use mysticnum_core::errors::InvalidDateError;
use mysticnum_core::models::{BirthRecord, Gender};

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").unwrap());

/// A validated date together with its eight digits in literal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedDate {
    pub record: BirthRecord,
    pub digits: [u8; 8],
}

/// Parse `date_str` strictly. Any other shape, or a field outside its range,
/// is an [`InvalidDateError`].
pub fn parse_date(date_str: &str, gender: Gender) -> Result<ParsedDate, InvalidDateError> {
    let malformed = || InvalidDateError::Malformed {
        input: date_str.to_string(),
    };
    let caps = DATE_RE.captures(date_str).ok_or_else(malformed)?;
    let field = |i: usize| -> Result<u32, InvalidDateError> {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(malformed)
    };
    let record = BirthRecord::new(field(1)?, field(2)?, field(3)?, gender)?;

    let mut digits = [0u8; 8];
    for (slot, b) in digits
        .iter_mut()
        .zip(date_str.bytes().filter(u8::is_ascii_digit))
    {
        *slot = b - b'0';
    }
    Ok(ParsedDate { record, digits })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_follow_string_order() {
        let parsed = parse_date("15.06.1990", Gender::Female).unwrap();
        assert_eq!(parsed.digits, [1, 5, 0, 6, 1, 9, 9, 0]);
        assert_eq!(parsed.record.day, 15);
        assert_eq!(parsed.record.month, 6);
        assert_eq!(parsed.record.year, 1990);
    }

    #[test]
    fn shape_is_strict() {
        for bad in ["1.06.1990", "15-06-1990", "15.06.90", " 15.06.1990", "15.06.1990.", ""] {
            assert!(
                matches!(parse_date(bad, Gender::Male), Err(InvalidDateError::Malformed { .. })),
                "{bad:?} should be malformed"
            );
        }
    }
}
