use super::fonts::ReportFace;
use super::layout::{Document, Element, Tone, PAGE_HEIGHT, PAGE_WIDTH};
use crate::error::{RecheckError, Result};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};

const LAYER: &str = "Report";

fn color(tone: Tone) -> Color {
    let (r, g, b) = match tone {
        Tone::Ink => (0.10, 0.10, 0.12),
        Tone::Muted => (0.45, 0.45, 0.48),
        Tone::Critical => (0.80, 0.12, 0.12),
        Tone::Warning => (0.90, 0.55, 0.05),
        Tone::Clear => (0.10, 0.55, 0.25),
    };
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn pdf_error(err: impl std::fmt::Debug) -> RecheckError {
    RecheckError::PdfEncode(format!("{err:?}"))
}

fn load_font(doc: &PdfDocumentReference, face: &ReportFace) -> Result<IndirectFontRef> {
    match face {
        ReportFace::Builtin => doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error),
        ReportFace::Embedded { name, bytes } => {
            tracing::debug!(font = %name, "embedding report font");
            doc.add_external_font(bytes.as_slice()).map_err(pdf_error)
        }
    }
}

fn draw(layer: &PdfLayerReference, font: &IndirectFontRef, elements: &[Element]) {
    for element in elements {
        match element {
            Element::Text(run) => {
                layer.set_fill_color(color(run.tone));
                layer.use_text(run.text.as_str(), run.size, Mm(run.x), Mm(run.y), font);
            }
            Element::Rule(rule) => {
                layer.set_outline_color(color(Tone::Muted));
                layer.set_outline_thickness(0.8);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(Mm(rule.x1), Mm(rule.y)), false),
                        (Point::new(Mm(rule.x2), Mm(rule.y)), false),
                    ],
                    ..Default::default()
                });
            }
        }
    }
}

/// Serialises the laid-out document into PDF bytes.
pub fn encode(document: &Document) -> Result<Vec<u8>> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(&document.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
    let font = load_font(&doc, &document.resolution.face)?;

    for (index, page) in document.pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_index, layer_index) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
            doc.get_page(page_index).get_layer(layer_index)
        };
        draw(&layer, &font, &page.elements);
    }

    let bytes = doc.save_to_bytes().map_err(pdf_error)?;
    tracing::debug!(
        pages = document.page_count(),
        bytes = bytes.len(),
        "encoded report"
    );
    Ok(bytes)
}
