use serde::{Deserialize, Serialize};

use crate::models::Gender;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Gender used when the caller does not pass one.
    pub default_gender: Gender,
}
