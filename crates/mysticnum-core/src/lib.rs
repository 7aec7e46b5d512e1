//! # mysticnum-core
//!
//! Foundation crate for the MysticNUM numerology engine.
//! Defines all types, traits, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod telemetry;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::MysticConfig;
pub use errors::{InvalidDateError, MysticError, MysticResult};
pub use models::{AnalysisResult, BirthRecord, FrequencyMatrix, Gender, Interpretation};
pub use traits::KnowledgeSource;
