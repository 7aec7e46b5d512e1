//! # mysticnum-export
//!
//! Exporters turning an [`ExportDocument`](mysticnum_core::models::ExportDocument)
//! into file bytes, plus [`write_to`] for putting them on disk.

pub mod json;
pub mod pdf;
pub mod text;

use std::path::{Path, PathBuf};

use mysticnum_core::errors::ExportError;
use mysticnum_core::models::ExportDocument;
use mysticnum_core::traits::IExporter;

pub use json::JsonExporter;
pub use pdf::PdfExporter;

/// Render `doc` and write it into `dir` under the exporter's file name.
/// Returns the written path.
pub fn write_to(
    dir: &Path,
    exporter: &dyn IExporter,
    doc: &ExportDocument,
) -> Result<PathBuf, ExportError> {
    let span = mysticnum_core::export_span!(exporter.extension(), doc.birth_date);
    let _guard = span.enter();

    let bytes = exporter.render(doc)?;
    let path = dir.join(exporter.file_name(doc));
    std::fs::write(&path, &bytes).map_err(|e| ExportError::Write {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "export written");
    Ok(path)
}
