use super::error_code::{self, MysticErrorCode};

/// Knowledge-table loading errors. Lookup misses are not errors.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("knowledge file not readable: {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("knowledge table parse error in {source_name}: {message}")]
    ParseError {
        source_name: String,
        message: String,
    },
}

impl MysticErrorCode for KnowledgeError {
    fn error_code(&self) -> &'static str {
        error_code::KNOWLEDGE_ERROR
    }
}
