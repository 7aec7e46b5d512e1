use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_dir: String,
    /// Interpretation text in the PDF is cut here and suffixed with `...`.
    pub max_interpretation_chars: usize,
    pub max_practices: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: defaults::DEFAULT_OUTPUT_DIR.to_string(),
            max_interpretation_chars: defaults::DEFAULT_MAX_INTERPRETATION_CHARS,
            max_practices: defaults::DEFAULT_MAX_PRACTICES,
        }
    }
}
