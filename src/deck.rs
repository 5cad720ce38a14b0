//! Deck assembly: places cards, paints them page by page, stamps the footer
//! on every page and serializes the document.
//!
//! PDF generation via `printpdf`. The document lives in memory until
//! [`export_deck`] persists it through a temp file, so a failed run never
//! leaves a half-written deck behind.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use printpdf::*;

use crate::card::Card;
use crate::config::{
    DeckConfig, FOOTER_COUNTER_INSET, FOOTER_FONT_SIZE, FOOTER_OFFSET, PAGE_HEIGHT_MM,
    PAGE_WIDTH_MM,
};
use crate::error::DeckError;
use crate::layout::{page_count, paginate, PageGrid};
use crate::metrics::{load_ttf, FontMetrics};
use crate::render::{compose_card, paint_card};
use crate::text::ASCENT;

const LAYER_NAME: &str = "Cards";

fn page_points() -> (f32, f32) {
    (Pt::from(Mm(PAGE_WIDTH_MM)).0, Pt::from(Mm(PAGE_HEIGHT_MM)).0)
}

/// Registers the deck font and returns it with the metrics used to lay
/// text out in it.
fn load_font(
    doc: &PdfDocumentReference,
    config: &DeckConfig,
) -> Result<(IndirectFontRef, FontMetrics), DeckError> {
    match &config.font_path {
        Some(path) => {
            let (data, metrics) = load_ttf(path)?;
            let font = doc
                .add_external_font(data.as_slice())
                .map_err(|e| DeckError::Font {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            tracing::info!(path = %path.display(), "Embedded custom font");
            Ok((font, metrics))
        }
        None => {
            let font = doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| DeckError::Pdf(format!("PDF font error: {e}")))?;
            Ok((font, FontMetrics::Helvetica))
        }
    }
}

/// Footer texts for page `page` (1-based) of `total`.
pub fn footer_texts(file_name: &str, page: usize, total: usize) -> (String, String) {
    (file_name.to_string(), format!("{page}/{total}"))
}

fn stamp_footer(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    grid: &PageGrid,
    left: &str,
    right: &str,
) {
    let baseline = grid.bounds.bottom - FOOTER_OFFSET - FOOTER_FONT_SIZE * ASCENT;
    let to_mm = |points: f32| Mm::from(Pt(points));
    layer.use_text(left, FOOTER_FONT_SIZE, to_mm(grid.bounds.left), to_mm(baseline), font);
    layer.use_text(
        right,
        FOOTER_FONT_SIZE,
        to_mm(grid.bounds.right() - FOOTER_COUNTER_INSET),
        to_mm(baseline),
        font,
    );
}

/// Renders `cards` into PDF bytes. `file_name` is printed in every footer.
pub fn generate_deck(
    cards: &[Card],
    file_name: &str,
    config: &DeckConfig,
) -> Result<Vec<u8>, DeckError> {
    if cards.is_empty() {
        return Err(DeckError::NoStories(file_name.to_string()));
    }

    let total_pages = page_count(cards.len());
    tracing::info!(
        cards = cards.len(),
        pages = total_pages,
        layout = ?config.layout,
        "Laying out deck"
    );

    let (doc, first_page, first_layer) =
        PdfDocument::new(file_name, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
    let (font, metrics) = load_font(&doc, config)?;

    let (width, height) = page_points();
    let mut layers = vec![doc.get_page(first_page).get_layer(first_layer)];

    for (card, position) in cards.iter().zip(paginate(cards.len())) {
        if position.starts_page {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            layers.push(doc.get_page(page).get_layer(layer));
        }
        // Grid geometry is computed fresh for every page.
        let grid = PageGrid::for_page(width, height);
        let cell = grid.cell(position.row, position.column);
        let ops = compose_card(card, config.layout, cell.width, cell.height, &metrics);
        paint_card(&layers[position.page], &font, &cell, &ops);
    }

    let grid = PageGrid::for_page(width, height);
    for (index, layer) in layers.iter().enumerate() {
        let (left, right) = footer_texts(file_name, index + 1, total_pages);
        stamp_footer(layer, &font, &grid, &left, &right);
    }

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| DeckError::Pdf(format!("PDF save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| DeckError::Pdf(format!("PDF buffer error: {e}")))
}

/// Atomically writes `pdf_bytes` to `dir/file_name`.
///
/// Bytes go to a temp file in `dir` first and are renamed into place only
/// once fully flushed; on error the temp file is removed and any existing
/// file at the destination is untouched.
pub fn export_deck(pdf_bytes: &[u8], file_name: &str, dir: &Path) -> Result<PathBuf, DeckError> {
    let path = dir.join(file_name);
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(pdf_bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(&path).map_err(|e| DeckError::Io(e.error))?;

    tracing::info!(path = %path.display(), bytes = pdf_bytes.len(), "Wrote deck");
    Ok(path)
}
