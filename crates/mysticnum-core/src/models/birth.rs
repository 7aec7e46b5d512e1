use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_YEAR, MIN_YEAR};
use crate::errors::date_error::DateField;
use crate::errors::InvalidDateError;

/// Gender flag selecting the branch of gender-dependent interpretations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Female,
    Male,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender '{0}', expected female or male")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" | "women" | "woman" | "женский" => Ok(Self::Female),
            "male" | "m" | "men" | "man" | "мужской" => Ok(Self::Male),
            _ => Err(UnknownGender(s.to_string())),
        }
    }
}

/// Validated engine input: a calendar date plus gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRecord {
    pub day: u32,
    pub month: u32,
    pub year: u32,
    pub gender: Gender,
}

impl BirthRecord {
    /// Build a record, rejecting any field outside its range.
    ///
    /// Day is only checked against 1..=31; the month length is not consulted.
    pub fn new(day: u32, month: u32, year: u32, gender: Gender) -> Result<Self, InvalidDateError> {
        check_range(DateField::Day, day, 1, 31)?;
        check_range(DateField::Month, month, 1, 12)?;
        check_range(DateField::Year, year, MIN_YEAR, MAX_YEAR)?;
        Ok(Self {
            day,
            month,
            year,
            gender,
        })
    }
}

fn check_range(field: DateField, value: u32, min: u32, max: u32) -> Result<(), InvalidDateError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(InvalidDateError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
