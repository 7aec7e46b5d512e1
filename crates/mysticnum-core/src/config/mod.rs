//! Configuration system for MysticNUM.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod defaults;
pub mod engine_config;
pub mod export_config;
pub mod knowledge_config;
pub mod mysticnum_config;
pub mod observability_config;
pub mod storage_config;

pub use engine_config::EngineConfig;
pub use export_config::ExportConfig;
pub use knowledge_config::{KnowledgeConfig, LibraryConfig};
pub use mysticnum_config::{CliOverrides, MysticConfig};
pub use observability_config::ObservabilityConfig;
pub use storage_config::StorageConfig;
