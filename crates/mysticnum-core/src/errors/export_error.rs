use super::error_code::{self, MysticErrorCode};

/// Export failures. Never touch the result being exported.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("PDF generation failed: {message}")]
    Pdf { message: String },

    #[error("JSON generation failed: {message}")]
    Json { message: String },

    #[error("could not write {path}: {reason}")]
    Write { path: String, reason: String },
}

impl MysticErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
