use std::path::PathBuf;

use clap::{Args, ValueEnum};

use mysticnum_core::models::{ExportDocument, Gender};
use mysticnum_core::traits::{IExporter, IPracticeStorage};
use mysticnum_engine::MatrixEngine;
use mysticnum_export::{write_to, JsonExporter, PdfExporter};

use crate::context::AppContext;

#[derive(Clone, Copy, ValueEnum)]
pub enum Format {
    Json,
    Pdf,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Birth date as DD.MM.YYYY
    pub date: String,

    #[arg(short, long)]
    pub gender: Option<Gender>,

    #[arg(short, long, value_enum, default_value = "pdf")]
    pub format: Format,

    /// Output directory (defaults to export.output_dir)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Include active practices from storage
    #[arg(long)]
    pub with_practices: bool,
}

pub fn handle(ctx: &AppContext, args: ExportArgs) -> anyhow::Result<()> {
    let gender = args.gender.unwrap_or(ctx.config.engine.default_gender);
    let result = MatrixEngine::new().compute(&args.date, gender, &ctx.knowledge)?;

    let mut doc = ExportDocument::new(&result);
    if args.with_practices {
        doc = doc.with_practices(ctx.storage()?.active_practices()?);
    }

    let dir = args
        .out
        .unwrap_or_else(|| PathBuf::from(&ctx.config.export.output_dir));
    let pdf = PdfExporter::new(&ctx.config.export);
    let exporter: &dyn IExporter = match args.format {
        Format::Json => &JsonExporter,
        Format::Pdf => &pdf,
    };
    let path = write_to(&dir, exporter, &doc)?;
    println!("Wrote {}", path.display());
    Ok(())
}
