use serde::{Deserialize, Serialize};

use super::birth::Gender;

/// A matrix-table value: either one text, or one text per gender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Interpretation {
    GenderBranched {
        #[serde(rename = "women")]
        female: String,
        #[serde(rename = "men")]
        male: String,
    },
    Plain(String),
}

impl Interpretation {
    /// Pick the text for `gender`; plain values ignore it.
    pub fn resolve(&self, gender: Gender) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::GenderBranched { female, male } => match gender {
                Gender::Female => female,
                Gender::Male => male,
            },
        }
    }

    /// Every text this value can resolve to.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Self::Plain(text) => vec![text.as_str()],
            Self::GenderBranched { female, male } => vec![female.as_str(), male.as_str()],
        }
    }
}

/// Resolved interpretation of one matrix position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitInterpretation {
    pub position: u8,
    pub count: u32,
    /// Key used against the matrix table (`"40"`, `"444"`, `"11111"`, ...).
    pub key: String,
    /// Display value: the repeated digit, or `"—"` when count is 0.
    pub value: String,
    pub text: String,
}
