use crate::errors::ExportError;
use crate::models::ExportDocument;

/// Renders an export document to bytes. Purely presentational: no validation,
/// no access to anything but the document.
pub trait IExporter {
    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, doc: &ExportDocument) -> Result<Vec<u8>, ExportError>;

    fn file_name(&self, doc: &ExportDocument) -> String {
        format!("{}.{}", doc.file_stem(), self.extension())
    }
}
