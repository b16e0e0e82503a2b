//! Answer transcript export.
//!
//! Lays out the current question, answer and matched video chunks as plain
//! text lines, then hands them to the PDF renderer. The layout is pure and
//! tested on its own; the renderer is an external collaborator.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use assistant_core::model::VideoMatch;

use crate::error::ExportError;

/// Fixed name of the exported file.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "sigma-web-dev-answer.pdf";

const PAGE_WIDTH_MM: f64 = 210.0;
const PAGE_HEIGHT_MM: f64 = 297.0;
const MARGIN_MM: f64 = 10.0;
const CURSOR_START_MM: f64 = 12.0;
const LINE_HEIGHT_MM: f64 = 6.0;
const PAGE_BREAK_MM: f64 = 280.0;
const WRAP_COLUMNS: usize = 95;

const HEADING_SIZE: f64 = 16.0;
const BODY_SIZE: f64 = 12.0;

/// One laid-out line of the export.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportLine {
    pub text: String,
    pub heading: bool,
}

impl ExportLine {
    fn heading(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            heading: true,
        }
    }

    fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            heading: false,
        }
    }
}

/// Snapshot of the answer state being exported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerExport {
    pub question: String,
    pub answer: String,
    pub matches: Vec<VideoMatch>,
}

impl AnswerExport {
    /// True when there is nothing worth exporting yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.question.trim().is_empty() && self.answer.trim().is_empty()
    }

    /// The full line layout: heading, question, answer, then one block per
    /// matched chunk with rounded second offsets.
    #[must_use]
    pub fn lines(&self) -> Vec<ExportLine> {
        let mut lines = vec![
            ExportLine::heading("Sigma Web Dev - AI Teaching Assistant"),
            ExportLine::body(""),
            ExportLine::body("Question:"),
        ];
        push_wrapped(&mut lines, or_dash(&self.question));
        lines.push(ExportLine::body(""));
        lines.push(ExportLine::body("Answer:"));
        push_wrapped(&mut lines, or_dash(&self.answer));

        if !self.matches.is_empty() {
            lines.push(ExportLine::body(""));
            lines.push(ExportLine::body("Relevant video chunks:"));
            for (idx, m) in self.matches.iter().enumerate() {
                lines.push(ExportLine::body(""));
                push_wrapped(
                    &mut lines,
                    &format!("#{} - Video {}: {}", idx + 1, m.number, m.title),
                );
                lines.push(ExportLine::body(format!(
                    "Time: {}s - {}s",
                    m.start_seconds(),
                    m.end_seconds()
                )));
                push_wrapped(&mut lines, &format!("Text: {}", m.text));
            }
        }
        lines
    }

    /// Renders the layout to a PDF file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Empty` when there is no question or answer,
    /// `ExportError::Io` when the file cannot be written, and
    /// `ExportError::Pdf` when rendering fails.
    pub fn save_pdf(&self, path: &Path) -> Result<(), ExportError> {
        if self.is_empty() {
            return Err(ExportError::Empty);
        }

        let (doc, first_page, first_layer) = PdfDocument::new(
            "Sigma Web Dev - AI Teaching Assistant",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "content",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|err| ExportError::Pdf(err.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|err| ExportError::Pdf(err.to_string()))?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        for (page_index, page_lines) in paginate(self.lines()).into_iter().enumerate() {
            if page_index > 0 {
                let (page, new_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
                layer = doc.get_page(page).get_layer(new_layer);
            }
            let mut cursor_mm = CURSOR_START_MM;
            for line in page_lines {
                if !line.text.is_empty() {
                    let (font, size) = if line.heading {
                        (&bold, HEADING_SIZE)
                    } else {
                        (&regular, BODY_SIZE)
                    };
                    layer.use_text(
                        line.text.clone(),
                        size,
                        Mm(MARGIN_MM),
                        Mm(PAGE_HEIGHT_MM - cursor_mm),
                        font,
                    );
                }
                cursor_mm += LINE_HEIGHT_MM;
            }
        }

        let file = File::create(path)?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|err| ExportError::Pdf(err.to_string()))?;
        Ok(())
    }
}

/// Splits laid-out lines into pages. The cursor starts at
/// `CURSOR_START_MM` and advances one line height per line; a line whose
/// cursor would sit past `PAGE_BREAK_MM` opens a new page.
#[must_use]
pub fn paginate(lines: Vec<ExportLine>) -> Vec<Vec<ExportLine>> {
    let mut pages = Vec::new();
    let mut current = Vec::new();
    let mut cursor_mm = CURSOR_START_MM;
    for line in lines {
        if cursor_mm > PAGE_BREAK_MM {
            pages.push(std::mem::take(&mut current));
            cursor_mm = CURSOR_START_MM;
        }
        current.push(line);
        cursor_mm += LINE_HEIGHT_MM;
    }
    pages.push(current);
    pages
}

fn or_dash(text: &str) -> &str {
    if text.trim().is_empty() { "-" } else { text }
}

fn push_wrapped(lines: &mut Vec<ExportLine>, text: &str) {
    for wrapped in wrap_text(text, WRAP_COLUMNS) {
        lines.push(ExportLine::body(wrapped));
    }
}

/// Greedy word wrap at `columns` characters. Words longer than a full line
/// are emitted on their own line rather than split.
#[must_use]
pub fn wrap_text(text: &str, columns: usize) -> Vec<String> {
    let mut wrapped = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= columns {
            current.push(' ');
            current.push_str(word);
        } else {
            wrapped.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        wrapped.push(current);
    }
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }
    wrapped
}
