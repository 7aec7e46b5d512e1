//! MysticNUM CLI
//!
//! # Commands
//!
//! - `calc`: compute and print a matrix analysis
//! - `export`: write a JSON or PDF report
//! - `history`, `practice`, `stats`, `backup`, `clear`: stored data
//! - `search`: knowledge library lookup
//! - `car`, `apartment`: number vibrations
//!
//! Exit code 1 on any error; errors print as `[CODE] message`.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mysticnum_core::errors::{MysticError, MysticErrorCode};

mod commands;
mod context;

use context::AppContext;

/// MysticNUM: numerology matrix calculator
#[derive(Parser)]
#[command(name = "mysticnum")]
#[command(version)]
#[command(about = "Numerology matrix calculator with history, practices and export")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// SQLite database path
    #[arg(long, global = true)]
    db: Option<String>,

    /// JSON file replacing the bundled knowledge tables
    #[arg(long, global = true)]
    tables: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the matrix for a DD.MM.YYYY birth date
    Calc(commands::calc::CalcArgs),
    /// Export a report as JSON or PDF
    Export(commands::export::ExportArgs),
    /// List stored calculations, newest first
    History(commands::history::HistoryArgs),
    /// Manage saved practices
    Practice {
        #[command(subcommand)]
        action: commands::practice::PracticeCommands,
    },
    /// Search the knowledge library
    Search(commands::library::SearchArgs),
    /// Usage statistics
    Stats,
    /// Vibration of a vehicle plate
    Car(commands::vibration::CarArgs),
    /// Vibration of an apartment number
    Apartment(commands::vibration::ApartmentArgs),
    /// Export or import a full backup
    Backup {
        #[command(subcommand)]
        action: commands::backup::BackupCommands,
    },
    /// Delete all stored data
    Clear(commands::backup::ClearArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", render_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = AppContext::load(cli.db, cli.tables, cli.verbose)?;
    match cli.command {
        Commands::Calc(args) => commands::calc::handle(&ctx, args),
        Commands::Export(args) => commands::export::handle(&ctx, args),
        Commands::History(args) => commands::history::handle(&ctx, args),
        Commands::Practice { action } => commands::practice::handle(&ctx, action),
        Commands::Search(args) => commands::library::handle_search(&ctx, args),
        Commands::Stats => commands::library::handle_stats(&ctx),
        Commands::Car(args) => commands::vibration::handle_car(&ctx, args),
        Commands::Apartment(args) => commands::vibration::handle_apartment(&ctx, args),
        Commands::Backup { action } => commands::backup::handle(&ctx, action),
        Commands::Clear(args) => commands::backup::handle_clear(&ctx, args),
    }
}

/// `[CODE] message` for library errors, the anyhow chain otherwise.
fn render_error(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<MysticError>() {
        return e.display_string();
    }
    if let Some(e) = err.downcast_ref::<mysticnum_core::InvalidDateError>() {
        return e.display_string();
    }
    if let Some(e) = err.downcast_ref::<mysticnum_core::errors::ConfigError>() {
        return e.display_string();
    }
    if let Some(e) = err.downcast_ref::<mysticnum_core::errors::KnowledgeError>() {
        return e.display_string();
    }
    if let Some(e) = err.downcast_ref::<mysticnum_core::errors::ExportError>() {
        return e.display_string();
    }
    format!("error: {err:#}")
}
