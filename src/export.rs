//! PDF export of meeting notes via `printpdf`.

use std::io::BufWriter;

use printpdf::*;
use thiserror::Error;

use crate::pipeline::MeetingNotes;

const WRAP_COLUMNS: usize = 90;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("PDF font error: {0}")]
    Font(String),

    #[error("PDF save error: {0}")]
    Save(String),
}

/// Cursor over an A4 document; adds a fresh page when a line would fall
/// below the bottom margin.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
}

impl PageCursor<'_> {
    /// Start a new page once the cursor passes the bottom margin.
    fn break_page_if_needed(&mut self) {
        if self.y < Mm(20.0) {
            let (page, layer) = self.doc.add_page(Mm(210.0), Mm(297.0), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = Mm(280.0);
        }
    }

    fn heading(&mut self, text: &str, bold: &IndirectFontRef) {
        self.break_page_if_needed();
        self.layer.use_text(text, 12.0, Mm(20.0), self.y, bold);
        self.y -= Mm(7.0);
    }

    fn line(&mut self, text: &str, font: &IndirectFontRef) {
        self.break_page_if_needed();
        self.layer.use_text(text, 10.0, Mm(25.0), self.y, font);
        self.y -= Mm(5.0);
    }

    fn gap(&mut self) {
        self.y -= Mm(5.0);
    }
}

/// Render meeting notes (and the transcript, when kept) to PDF bytes.
///
/// Sections: Summary, Transcript (optional), Action Items, Important
/// Dates. Long lines are word-wrapped; overflow starts a new page.
pub fn export_meeting_pdf(
    transcript: Option<&str>,
    notes: &MeetingNotes,
) -> Result<Vec<u8>, ExportError> {
    let (doc, page1, layer1) =
        PdfDocument::new("Meeting Summary", Mm(210.0), Mm(297.0), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Font(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Font(e.to_string()))?;

    let mut cursor = PageCursor {
        layer: doc.get_page(page1).get_layer(layer1),
        doc: &doc,
        y: Mm(280.0),
    };

    write_section(&mut cursor, "Summary:", &wrap_block(&notes.summary), &font, &bold);

    if let Some(transcript) = transcript.filter(|t| !t.trim().is_empty()) {
        write_section(&mut cursor, "Transcript:", &wrap_block(transcript), &font, &bold);
    }

    let action_lines = if notes.actions.is_empty() {
        vec!["(No action items found.)".to_string()]
    } else {
        notes
            .actions
            .iter()
            .flat_map(|a| wrap_text(&format!("- {a}"), WRAP_COLUMNS))
            .collect()
    };
    write_section(&mut cursor, "Action Items:", &action_lines, &font, &bold);

    let date_lines = if notes.dates.is_empty() {
        vec!["(No important dates found.)".to_string()]
    } else {
        notes
            .dates
            .iter()
            .flat_map(|d| wrap_text(&format!("- {}: {}", d.date, d.context), WRAP_COLUMNS))
            .collect()
    };
    write_section(&mut cursor, "Important Dates:", &date_lines, &font, &bold);

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Save(e.to_string()))?;
    buf.into_inner()
        .map_err(|e| ExportError::Save(e.to_string()))
}

fn write_section(
    cursor: &mut PageCursor<'_>,
    title: &str,
    lines: &[String],
    font: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    cursor.heading(title, bold);
    for line in lines {
        cursor.line(line, font);
    }
    cursor.gap();
}

/// Wrap every line of a multi-line block.
fn wrap_block(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        lines.extend(wrap_text(raw, WRAP_COLUMNS));
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Simple word-wrap helper for PDF text rendering.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
