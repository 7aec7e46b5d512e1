//! # mysticnum-knowledge
//!
//! The knowledge-table collaborator. Loads the task, matrix, and vibration
//! tables from JSON (bundled or user-supplied) and exposes them through
//! [`KnowledgeSource`](mysticnum_core::KnowledgeSource).

pub mod base;
pub mod search;

pub use base::{KnowledgeBase, BUNDLED_TABLES};
pub use search::search;
