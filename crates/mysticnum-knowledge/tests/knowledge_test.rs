use mysticnum_core::config::LibraryConfig;
use mysticnum_core::models::{Gender, Interpretation, KnowledgeSection};
use mysticnum_core::traits::KnowledgeSource;
use mysticnum_knowledge::{search, KnowledgeBase};

#[test]
fn bundled_tables_load_with_every_section() {
    let kb = KnowledgeBase::bundled().unwrap();
    let stats = kb.stats();
    assert!(stats.tasks >= 9);
    assert!(stats.matrix >= 50);
    assert_eq!(stats.vibrations, 9);
}

#[test]
fn bundled_tables_cover_zero_keys_for_every_position() {
    let kb = KnowledgeBase::bundled().unwrap();
    for d in 1..=9 {
        assert!(kb.matrix(&format!("{d}0")).is_some(), "missing {d}0");
    }
}

#[test]
fn missing_keys_are_none_not_errors() {
    let kb = KnowledgeBase::bundled().unwrap();
    assert!(kb.task("999").is_none());
    assert!(kb.matrix("99999").is_none());
    assert!(kb.vibration("0").is_none());
}

#[test]
fn gender_branched_entries_resolve_per_gender() {
    let kb = KnowledgeBase::from_json_str(
        r#"{"matrix": {"1": {"women": "W", "men": "M"}, "2": "plain"}}"#,
    )
    .unwrap();
    let one = kb.matrix("1").unwrap();
    assert!(matches!(one, Interpretation::GenderBranched { .. }));
    assert_eq!(one.resolve(Gender::Female), "W");
    assert_eq!(one.resolve(Gender::Male), "M");
    assert_eq!(kb.matrix("2").unwrap().resolve(Gender::Male), "plain");
}

#[test]
fn missing_sections_default_to_empty() {
    let kb = KnowledgeBase::from_json_str(r#"{"tasks": {"4": "four"}, "meta": {"v": 1}}"#).unwrap();
    assert_eq!(kb.task("4"), Some("four"));
    assert_eq!(kb.stats().matrix, 0);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = KnowledgeBase::from_json_str("{not json").unwrap_err();
    assert!(err.to_string().contains("<string>"));
}

#[test]
fn from_path_reads_file_and_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.json");
    std::fs::write(&path, r#"{"tasks": {"1": "one"}}"#).unwrap();
    let kb = KnowledgeBase::load(Some(&path)).unwrap();
    assert_eq!(kb.task("1"), Some("one"));

    let missing = KnowledgeBase::from_path(&dir.path().join("nope.json"));
    assert!(missing.is_err());
}

#[test]
fn search_requires_minimum_query_length() {
    let kb = KnowledgeBase::bundled().unwrap();
    let config = LibraryConfig::default();
    assert!(search(&kb, "h", &config).is_empty());
    assert!(!search(&kb, "health", &config).is_empty());
}

#[test]
fn search_is_case_insensitive_and_ordered_by_section() {
    let kb = KnowledgeBase::from_json_str(
        r#"{
            "tasks": {"2": "Luck follows patience"},
            "matrix": {"7": "LUCK is weak", "70": {"women": "no luck", "men": "none"}},
            "vibrations": {"1": "luck of the driver"}
        }"#,
    )
    .unwrap();
    let hits = search(&kb, "luck", &LibraryConfig::default());
    let sections: Vec<_> = hits.iter().map(|h| h.section).collect();
    assert_eq!(
        sections,
        vec![
            KnowledgeSection::Tasks,
            KnowledgeSection::Matrix,
            KnowledgeSection::Matrix,
            KnowledgeSection::Vibrations
        ]
    );
    assert_eq!(hits[1].key, "7");
}

#[test]
fn search_caps_result_count() {
    let kb = KnowledgeBase::bundled().unwrap();
    let config = LibraryConfig {
        min_query_len: 2,
        max_results: 3,
    };
    assert_eq!(search(&kb, "is", &config).len(), 3);
}
