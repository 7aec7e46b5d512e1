//! PDF report via `lopdf`: A4 portrait, standard Helvetica, uncompressed
//! content streams.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use mysticnum_core::config::ExportConfig;
use mysticnum_core::constants::{MATRIX_POSITIONS, PRODUCT_LINE};
use mysticnum_core::errors::ExportError;
use mysticnum_core::models::{ExportDocument, ProgramKind};
use mysticnum_core::traits::IExporter;

use crate::text::{to_ascii, truncate, wrap};

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 50;
const FOOTER_Y: i64 = 30;
const BOTTOM: i64 = 70;

const TITLE_SIZE: i64 = 18;
const HEADING_SIZE: i64 = 14;
const BODY_SIZE: i64 = 11;
const FOOTER_SIZE: i64 = 9;

/// Characters per body line at 11pt Helvetica across the text column.
const WRAP_WIDTH: usize = 90;
const PRACTICE_DESCRIPTION_LINES: usize = 3;

/// Paginated PDF report.
#[derive(Debug, Clone)]
pub struct PdfExporter {
    max_interpretation_chars: usize,
    max_practices: usize,
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new(&ExportConfig::default())
    }
}

impl PdfExporter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            max_interpretation_chars: config.max_interpretation_chars,
            max_practices: config.max_practices,
        }
    }

    fn lay_out(&self, doc: &ExportDocument) -> Vec<Vec<TextLine>> {
        let analysis = &doc.analysis;
        let mut layout = Layout::new();

        layout.line("MysticNUM Numerology Report", TITLE_SIZE);
        layout.gap();
        layout.line(&format!("Birth date: {}", doc.birth_date), BODY_SIZE);
        layout.line(&format!("Gender: {}", doc.gender), BODY_SIZE);
        layout.gap();

        layout.line("Matrix", HEADING_SIZE);
        for position in MATRIX_POSITIONS {
            layout.line(
                &format!("Cell {position}: {}", analysis.matrix.cell(position)),
                BODY_SIZE,
            );
        }
        layout.gap();

        let derived = &analysis.derived;
        layout.line("Derived numbers", HEADING_SIZE);
        layout.line(&format!("First: {}", derived.first), BODY_SIZE);
        layout.line(&format!("Second: {}", derived.second), BODY_SIZE);
        if let Some(addend) = derived.addend {
            layout.line(&format!("Addend: {addend}"), BODY_SIZE);
        }
        layout.line(&format!("Third: {}", derived.third), BODY_SIZE);
        layout.line(&format!("Fourth: {}", derived.fourth), BODY_SIZE);
        layout.wrapped(&format!("Personal task: {}", analysis.personal_task), None);
        layout.wrapped(&format!("Ancestral task: {}", analysis.ancestral_task), None);
        layout.gap();

        layout.line("Interpretations", HEADING_SIZE);
        for (position, interp) in &analysis.interpretations {
            let text = truncate(&interp.text, self.max_interpretation_chars);
            layout.wrapped(&format!("{position} ({}): {text}", interp.value), None);
        }

        if !analysis.warnings.is_empty() {
            layout.gap();
            layout.line("Warnings", HEADING_SIZE);
            for warning in &analysis.warnings {
                layout.wrapped(
                    &format!("{}: {}", warning.title, warning.description),
                    None,
                );
            }
        }

        layout.new_page();
        layout.line("Ancestral programs", HEADING_SIZE);
        if analysis.ancestral_programs.is_empty() {
            layout.line("None detected.", BODY_SIZE);
        }
        for program in &analysis.ancestral_programs {
            layout.line(
                &format!("[{}] {}", kind_label(program.kind), program.title),
                BODY_SIZE,
            );
            layout.wrapped(&program.description, None);
            layout.gap();
        }

        if !doc.practices.is_empty() {
            layout.new_page();
            layout.line("Saved practices", HEADING_SIZE);
            for practice in doc.practices.iter().take(self.max_practices) {
                layout.line(&practice.title, BODY_SIZE);
                layout.wrapped(&practice.description, Some(PRACTICE_DESCRIPTION_LINES));
                layout.gap();
            }
        }

        layout.finish()
    }
}

fn kind_label(kind: ProgramKind) -> &'static str {
    match kind {
        ProgramKind::Warning => "WARNING",
        ProgramKind::Power => "POWER",
        ProgramKind::Critical => "CRITICAL",
        ProgramKind::Talent => "TALENT",
    }
}

impl IExporter for PdfExporter {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, doc: &ExportDocument) -> Result<Vec<u8>, ExportError> {
        let pages = self.lay_out(doc);
        tracing::debug!(pages = pages.len(), "pdf laid out");
        build_pdf(&pages)
    }
}

#[derive(Debug, Clone)]
struct TextLine {
    text: String,
    size: i64,
    y: i64,
}

/// Top-to-bottom line placement with automatic page breaks.
struct Layout {
    pages: Vec<Vec<TextLine>>,
    y: i64,
}

impl Layout {
    fn new() -> Self {
        Self {
            pages: vec![Vec::new()],
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn line(&mut self, text: &str, size: i64) {
        let height = size + 4;
        if self.y - height < BOTTOM {
            self.new_page();
        }
        self.y -= height;
        if let Some(page) = self.pages.last_mut() {
            page.push(TextLine {
                text: to_ascii(text),
                size,
                y: self.y,
            });
        }
    }

    fn wrapped(&mut self, text: &str, max_lines: Option<usize>) {
        let lines = wrap(&to_ascii(text), WRAP_WIDTH);
        let limit = max_lines.unwrap_or(lines.len());
        for line in lines.iter().take(limit) {
            self.line(line, BODY_SIZE);
        }
    }

    fn gap(&mut self) {
        self.y -= BODY_SIZE / 2;
    }

    fn new_page(&mut self) {
        if self.pages.last().is_some_and(Vec::is_empty) {
            self.y = PAGE_HEIGHT - MARGIN;
            return;
        }
        self.pages.push(Vec::new());
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn finish(mut self) -> Vec<Vec<TextLine>> {
        if self.pages.len() > 1 && self.pages.last().is_some_and(Vec::is_empty) {
            self.pages.pop();
        }
        self.pages
    }
}

fn pdf_err(e: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf {
        message: e.to_string(),
    }
}

fn text_ops(ops: &mut Vec<Operation>, x: i64, y: i64, size: i64, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec!["F1".into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    ops.push(Operation::new("ET", vec![]));
}

fn build_pdf(pages: &[Vec<TextLine>]) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let total = pages.len();
    let mut kids: Vec<Object> = Vec::with_capacity(total);
    for (index, lines) in pages.iter().enumerate() {
        let mut ops = Vec::new();
        for line in lines {
            text_ops(&mut ops, MARGIN, line.y, line.size, &line.text);
        }
        let footer = format!("Page {} of {} - {}", index + 1, total, PRODUCT_LINE);
        text_ops(&mut ops, MARGIN, FOOTER_Y, FOOTER_SIZE, &footer);

        let content = Content { operations: ops };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().map_err(pdf_err)?,
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => total as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(PAGE_WIDTH),
                Object::Integer(PAGE_HEIGHT),
            ],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).map_err(pdf_err)?;
    Ok(buf)
}
