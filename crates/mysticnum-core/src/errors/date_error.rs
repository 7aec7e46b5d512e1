//! Birth date validation errors. The only failure mode of the matrix engine.

use super::error_code::{self, MysticErrorCode};

/// Field of a `DD.MM.YYYY` date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Day,
    Month,
    Year,
}

impl std::fmt::Display for DateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => f.write_str("day"),
            Self::Month => f.write_str("month"),
            Self::Year => f.write_str("year"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDateError {
    #[error("'{input}' is not a DD.MM.YYYY date")]
    Malformed { input: String },

    #[error("{field} {value} is outside {min}..={max}")]
    OutOfRange {
        field: DateField,
        value: u32,
        min: u32,
        max: u32,
    },
}

impl MysticErrorCode for InvalidDateError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_DATE
    }
}
