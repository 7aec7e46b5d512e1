//! Stable error codes for the CLI boundary.

/// Every error enum maps to a stable code string so front ends can branch
/// on the failure kind without parsing messages.
pub trait MysticErrorCode {
    /// Returns the error code string (e.g., "INVALID_DATE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_DATE: &str = "INVALID_DATE";
pub const KNOWLEDGE_ERROR: &str = "KNOWLEDGE_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
