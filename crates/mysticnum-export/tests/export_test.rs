//! JSON and PDF exporters over real engine output.

use lopdf::Document;

use mysticnum_core::config::ExportConfig;
use mysticnum_core::models::{ExportDocument, Gender, Practice};
use mysticnum_core::traits::IExporter;
use mysticnum_core::AnalysisResult;
use mysticnum_engine::MatrixEngine;
use mysticnum_export::{write_to, JsonExporter, PdfExporter};
use mysticnum_knowledge::KnowledgeBase;

fn analysis(date: &str) -> AnalysisResult {
    let kb = KnowledgeBase::bundled().unwrap();
    MatrixEngine::new().compute(date, Gender::Female, &kb).unwrap()
}

fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|w| w == needle.as_bytes())
}

fn page_count(bytes: &[u8]) -> usize {
    Document::load_mem(bytes).unwrap().get_pages().len()
}

#[test]
fn file_names_follow_birth_date() {
    let doc = ExportDocument::new(&analysis("15.06.1990"));
    assert_eq!(JsonExporter.file_name(&doc), "numerology_15_06_1990.json");
    assert_eq!(
        PdfExporter::default().file_name(&doc),
        "numerology_15_06_1990.pdf"
    );
}

#[test]
fn json_roundtrips_the_document() {
    let doc = ExportDocument::new(&analysis("01.01.2024"));
    let bytes = JsonExporter.render(&doc).unwrap();
    let back: ExportDocument = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(back, doc);
    assert!(contains(&bytes, "\n  \"birth_date\": \"01.01.2024\""));
}

#[test]
fn pdf_has_report_and_program_pages() {
    let doc = ExportDocument::new(&analysis("15.06.1990"));
    let bytes = PdfExporter::default().render(&doc).unwrap();

    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(page_count(&bytes), 2);
    assert!(contains(&bytes, "Cell 1: 11111"));
    assert!(contains(&bytes, "Cell 7: -"));
    assert!(contains(&bytes, "Broken luck channel"));
    assert!(contains(&bytes, "Page 1 of 2 - MysticNUM Complete"));
    assert!(contains(&bytes, "Page 2 of 2 - MysticNUM Complete"));
}

#[test]
fn practices_get_their_own_page() {
    let practices = (0..12)
        .map(|i| {
            let mut p = Practice::new(format!("Practice {i}"), "word ".repeat(200));
            p.id = format!("p{i}");
            p
        })
        .collect();
    let doc = ExportDocument::new(&analysis("15.06.1990")).with_practices(practices);
    let bytes = PdfExporter::default().render(&doc).unwrap();

    assert_eq!(page_count(&bytes), 3);
    assert!(contains(&bytes, "Practice 9"));
    assert!(!contains(&bytes, "Practice 10"));
    assert!(contains(&bytes, "Page 3 of 3"));
}

#[test]
fn interpretations_are_truncated() {
    let config = ExportConfig {
        max_interpretation_chars: 5,
        ..ExportConfig::default()
    };
    let result = analysis("15.06.1990");
    let first = result.interpretations.values().next().unwrap();
    let cut: String = first.text.chars().take(5).collect();
    let doc = ExportDocument::new(&result);
    let bytes = PdfExporter::new(&config).render(&doc).unwrap();

    assert!(contains(&bytes, &format!("{cut}...")));
}

#[test]
fn write_to_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = analysis("01.01.2024");
    let doc = ExportDocument::new(&result);

    let path = write_to(dir.path(), &JsonExporter, &doc).unwrap();
    assert_eq!(path, dir.path().join("numerology_01_01_2024.json"));
    assert!(path.exists());

    let pdf = write_to(dir.path(), &PdfExporter::default(), &doc).unwrap();
    assert!(std::fs::read(&pdf).unwrap().starts_with(b"%PDF-"));

    // The source result is untouched by exporting.
    assert_eq!(doc.analysis, result);
}

#[test]
fn write_to_missing_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    let doc = ExportDocument::new(&analysis("01.01.2024"));
    let err = write_to(&dir.path().join("nope"), &JsonExporter, &doc).unwrap_err();
    assert!(matches!(
        err,
        mysticnum_core::errors::ExportError::Write { .. }
    ));
}
