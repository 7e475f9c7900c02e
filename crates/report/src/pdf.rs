//! A4 PDF rendering of laid-out report lines.

use crate::error::ReportError;
use crate::layout::{LineStyle, ReportLine};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const LAYER: &str = "Report";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    mono: IndirectFontRef,
}

impl LineStyle {
    /// Font size in points and line advance in millimetres.
    fn metrics(self) -> (f32, f32) {
        match self {
            Self::Title => (22.0, 11.0),
            Self::Heading => (14.0, 8.0),
            Self::Body => (11.0, 6.0),
            Self::Mono => (9.0, 4.5),
            Self::Blank => (0.0, 4.0),
        }
    }
}

/// Renders `lines` top to bottom, starting a new page whenever the bottom
/// margin is reached.
///
/// Built-in PDF fonts only cover WinAnsi, so non-ASCII characters are
/// replaced with `?`.
///
/// # Errors
/// Returns [`ReportError::Pdf`] if a font cannot be registered or the
/// document cannot be serialized.
pub fn render_pdf(title: &str, lines: &[ReportLine]) -> Result<Vec<u8>, ReportError> {
    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        mono: doc.add_builtin_font(BuiltinFont::Courier)?,
    };

    let mut current: PdfLayerReference = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in lines {
        let (size, advance) = line.style.metrics();
        if y - advance < MARGIN {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
            current = doc.get_page(page).get_layer(layer);
            y = PAGE_HEIGHT - MARGIN;
        }
        y -= advance;

        let font = match line.style {
            LineStyle::Blank => continue,
            LineStyle::Title | LineStyle::Heading => &fonts.bold,
            LineStyle::Body => &fonts.regular,
            LineStyle::Mono => &fonts.mono,
        };
        current.use_text(ascii(&line.text), size, Mm(MARGIN), Mm(y), font);
    }

    Ok(doc.save_to_bytes()?)
}

fn ascii(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii() { c } else { '?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(text: &str) -> ReportLine {
        ReportLine {
            style: LineStyle::Body,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_render_produces_pdf() {
        let bytes = render_pdf("ROI Report", &[body("Hello")]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_reports_span_pages() {
        let one: Vec<ReportLine> = (0..10).map(|i| body(&format!("row {i}"))).collect();
        let many: Vec<ReportLine> = (0..200).map(|i| body(&format!("row {i}"))).collect();

        let short = render_pdf("ROI Report", &one).unwrap();
        let long = render_pdf("ROI Report", &many).unwrap();
        assert!(long.len() > short.len());
        assert!(long.starts_with(b"%PDF"));
    }

    #[test]
    fn test_non_ascii_replaced() {
        assert_eq!(ascii("Café €5"), "Caf? ?5");
    }
}
