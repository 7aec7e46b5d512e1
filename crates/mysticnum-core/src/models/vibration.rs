use serde::{Deserialize, Serialize};

/// Reduced number of a plate or apartment, with optional table text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibrationReading {
    pub input: String,
    pub number: u32,
    pub text: Option<String>,
}
