use mysticnum_core::errors::ExportError;
use mysticnum_core::models::ExportDocument;
use mysticnum_core::traits::IExporter;

/// Pretty-printed JSON of the whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl IExporter for JsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, doc: &ExportDocument) -> Result<Vec<u8>, ExportError> {
        serde_json::to_vec_pretty(doc).map_err(|e| ExportError::Json {
            message: e.to_string(),
        })
    }
}
