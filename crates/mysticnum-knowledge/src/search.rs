//! Case-insensitive substring search over every table entry.

use mysticnum_core::config::LibraryConfig;
use mysticnum_core::models::{KnowledgeSection, LibraryHit};

use crate::base::KnowledgeBase;

const SNIPPET_CHARS: usize = 150;

/// Search key and text of every entry. Queries shorter than
/// `config.min_query_len` characters match nothing. Hits are ordered by
/// section (tasks, matrix, vibrations) then key, capped at `config.max_results`.
pub fn search(kb: &KnowledgeBase, query: &str, config: &LibraryConfig) -> Vec<LibraryHit> {
    let query = query.trim();
    if query.chars().count() < config.min_query_len {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let tasks = kb
        .tasks
        .iter()
        .map(|(k, v)| (KnowledgeSection::Tasks, k, vec![v.as_str()]));
    let matrix = kb
        .matrix
        .iter()
        .map(|(k, v)| (KnowledgeSection::Matrix, k, v.texts()));
    let vibrations = kb
        .vibrations
        .iter()
        .map(|(k, v)| (KnowledgeSection::Vibrations, k, vec![v.as_str()]));

    let hits: Vec<LibraryHit> = tasks
        .chain(matrix)
        .chain(vibrations)
        .filter(|(_, key, texts)| {
            key.to_lowercase().contains(&needle)
                || texts.iter().any(|t| t.to_lowercase().contains(&needle))
        })
        .take(config.max_results)
        .map(|(section, key, texts)| LibraryHit {
            section,
            key: key.clone(),
            snippet: snippet(&texts.join(" / ")),
        })
        .collect();

    tracing::debug!(query, hits = hits.len(), "library search");
    hits
}

fn snippet(text: &str) -> String {
    if text.chars().count() > SNIPPET_CHARS {
        let cut: String = text.chars().take(SNIPPET_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::snippet;

    #[test]
    fn snippet_truncates_on_char_boundary() {
        let long = "я".repeat(200);
        let s = snippet(&long);
        assert_eq!(s.chars().count(), 153);
        assert!(s.ends_with("..."));
    }
}
