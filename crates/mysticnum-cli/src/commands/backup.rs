use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Subcommand};

use mysticnum_core::models::Backup;

use crate::context::AppContext;

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Write all stored data to a JSON file
    Export { path: PathBuf },
    /// Replace all stored data with a JSON backup
    Import { path: PathBuf },
}

#[derive(Args)]
pub struct ClearArgs {
    /// Confirm deletion
    #[arg(long)]
    pub yes: bool,
}

pub fn handle(ctx: &AppContext, action: BackupCommands) -> anyhow::Result<()> {
    let storage = ctx.storage()?;
    match action {
        BackupCommands::Export { path } => {
            let backup = storage.export_backup()?;
            std::fs::write(&path, serde_json::to_string_pretty(&backup)?)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!(
                "Exported {} calculations to {}",
                backup.calculations.len(),
                path.display()
            );
        }
        BackupCommands::Import { path } => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            let backup: Backup = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a valid backup", path.display()))?;
            storage.import_backup(&backup)?;
            println!("Imported {} calculations.", backup.calculations.len());
        }
    }
    Ok(())
}

pub fn handle_clear(ctx: &AppContext, args: ClearArgs) -> anyhow::Result<()> {
    if !args.yes {
        anyhow::bail!("refusing to clear without --yes");
    }
    ctx.storage()?.clear_all()?;
    println!("All stored data cleared.");
    Ok(())
}
