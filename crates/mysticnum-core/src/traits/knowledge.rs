use crate::models::Interpretation;

/// Read-only interpretation tables consulted by the engine.
///
/// Absence of a key is a valid "not found" outcome, never an error.
pub trait KnowledgeSource: Send + Sync {
    /// Task table: `"4"`, `"11"`, ... -> text.
    fn task(&self, key: &str) -> Option<&str>;

    /// Matrix table: `"{digit}0"` or the digit repeated 1–5 times.
    fn matrix(&self, key: &str) -> Option<&Interpretation>;

    /// Vibration table for the auxiliary calculators.
    fn vibration(&self, _key: &str) -> Option<&str> {
        None
    }
}
