//! Shared state for one CLI invocation.

use std::path::Path;

use anyhow::Context as _;

use mysticnum_core::config::{CliOverrides, MysticConfig};
use mysticnum_core::telemetry::{init_tracing, init_tracing_with_filter};
use mysticnum_knowledge::KnowledgeBase;
use mysticnum_storage::StorageEngine;

pub struct AppContext {
    pub config: MysticConfig,
    pub knowledge: KnowledgeBase,
}

impl AppContext {
    pub fn load(db: Option<String>, tables: Option<String>, verbose: u8) -> anyhow::Result<Self> {
        let overrides = CliOverrides {
            db_path: db,
            tables_path: tables,
            output_dir: None,
        };
        let root = std::env::current_dir().context("cannot read working directory")?;
        let config = MysticConfig::load(&root, Some(&overrides))?;

        match verbose {
            0 => init_tracing(&config.observability),
            1 => init_tracing_with_filter("mysticnum=debug"),
            _ => init_tracing_with_filter("trace"),
        }

        let knowledge = KnowledgeBase::load(config.knowledge.tables_path.as_deref().map(Path::new))?;
        tracing::debug!(db = %config.storage.db_path, "configuration loaded");
        Ok(Self { config, knowledge })
    }

    /// Opened on demand so read-only commands never touch the database.
    pub fn storage(&self) -> anyhow::Result<StorageEngine> {
        Ok(StorageEngine::from_config(&self.config.storage)?)
    }
}
