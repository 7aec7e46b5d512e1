//! Error handling for MysticNUM.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod date_error;
pub mod error_code;
pub mod export_error;
pub mod knowledge_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use date_error::InvalidDateError;
pub use error_code::MysticErrorCode;
pub use export_error::ExportError;
pub use knowledge_error::KnowledgeError;
pub use storage_error::StorageError;

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum MysticError {
    #[error("invalid date: {0}")]
    InvalidDate(#[from] InvalidDateError),

    #[error("knowledge error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type MysticResult<T> = Result<T, MysticError>;

impl MysticErrorCode for MysticError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidDate(e) => e.error_code(),
            Self::Knowledge(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
