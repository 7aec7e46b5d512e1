//! Top-level MysticNUM configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults::PROJECT_CONFIG_FILE;
use super::{
    EngineConfig, ExportConfig, KnowledgeConfig, LibraryConfig, ObservabilityConfig,
    StorageConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MYSTICNUM_*`)
/// 3. Project config (`mysticnum.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MysticConfig {
    pub storage: StorageConfig,
    pub knowledge: KnowledgeConfig,
    pub library: LibraryConfig,
    pub export: ExportConfig,
    pub engine: EngineConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db_path: Option<String>,
    pub tables_path: Option<String>,
    pub output_dir: Option<String>,
}

impl MysticConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `MYSTICNUM_*` variables read through `lookup`.
    /// Unparsable numeric values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("MYSTICNUM_DB_PATH") {
            self.storage.db_path = path;
        }
        if let Some(limit) = lookup("MYSTICNUM_HISTORY_LIMIT").and_then(|v| v.parse().ok()) {
            self.storage.history_limit = limit;
        }
        if let Some(path) = lookup("MYSTICNUM_TABLES_PATH") {
            self.knowledge.tables_path = Some(path);
        }
        if let Some(level) = lookup("MYSTICNUM_LOG_LEVEL") {
            self.observability.log_level = level;
        }
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref db_path) = cli.db_path {
            self.storage.db_path = db_path.clone();
        }
        if let Some(ref tables_path) = cli.tables_path {
            self.knowledge.tables_path = Some(tables_path.clone());
        }
        if let Some(ref output_dir) = cli.output_dir {
            self.export.output_dir = output_dir.clone();
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.history_limit == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "storage.history_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.library.max_results == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "library.max_results".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.library.min_query_len == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "library.min_query_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}
