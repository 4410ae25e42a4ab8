//! Card sheet assembly with `printpdf`.
//!
//! One pass over the track sequence, in order: every fourth card opens a
//! fresh A4 page, each card fills one grid row. The finished document is
//! written through a temp file in the destination directory so the output
//! path never holds a half-written PDF.

use std::io::{BufWriter, Write};
use std::path::Path;

use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject,
    IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Px, Rect, Rgb,
};
use printpdf::path::PaintMode;
use tempfile::NamedTempFile;

use crate::domain::Track;
use crate::sheet::error::RenderError;
use crate::sheet::layout::{
    ACCENT_RGB, ARTIST_LINE_MM, BACKGROUND_RGB, CardSlot, CELL_SIZE_MM, CODE_X_MM, INFO_X_MM,
    PAGE_HEIGHT_MM, PAGE_WIDTH_MM, TEXT_FONT_PT, TITLE_LINE_MM, TITLE_TOP_MM, YEAR_BAND_MM,
    YEAR_FONT_PT, YEAR_TOP_MM, from_top_mm,
};
use crate::sheet::qr::{self, QrRaster};

const LAYER_NAME: &str = "cards";
const DOCUMENT_TITLE: &str = "Music cards";

const PT_TO_MM: f32 = 0.352_778;
/// Average glyph advance of Helvetica Bold, as a fraction of the font size.
/// Close enough for centering card text without shipping font metrics.
const AVG_GLYPH_EM: f32 = 0.52;
const CAP_HEIGHT_EM: f32 = 0.72;

/// Raster resolution used when scaling QR images into their cells.
const IMAGE_DPI: f32 = 300.0;

/// Lays the tracks out as cards and writes the finished PDF to `out`.
///
/// Fail-fast: the first QR code that cannot be encoded aborts the render
/// and nothing is written.
pub fn render(tracks: &[Track], out: &Path) -> Result<(), RenderError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );
    let font = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    for (i, track) in tracks.iter().enumerate() {
        let slot = CardSlot::for_index(i);
        if i > 0 && slot.starts_page() {
            let (page, page_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            layer = doc.get_page(page).get_layer(page_layer);
        }

        let raster = qr::encode(&track.url).map_err(|source| RenderError::Qr {
            url: track.url.clone(),
            source,
        })?;

        draw_info_cell(&layer, &font, track, slot);
        draw_code_cell(&layer, raster, slot);
    }

    persist(doc, out)
}

fn draw_info_cell(layer: &PdfLayerReference, font: &IndirectFontRef, track: &Track, slot: CardSlot) {
    draw_cell_background(layer, INFO_X_MM, slot.cell_top_mm());

    // text uses the fill color
    layer.set_fill_color(palette_color(ACCENT_RGB));

    let row_top = slot.row_top_mm();
    draw_wrapped(layer, font, &track.artist, TEXT_FONT_PT, row_top, ARTIST_LINE_MM);
    draw_centered_line(
        layer,
        font,
        &track.release_year,
        YEAR_FONT_PT,
        row_top + YEAR_TOP_MM,
        YEAR_BAND_MM,
    );
    draw_wrapped(
        layer,
        font,
        &track.name,
        TEXT_FONT_PT,
        row_top + TITLE_TOP_MM,
        TITLE_LINE_MM,
    );
}

fn draw_code_cell(layer: &PdfLayerReference, raster: QrRaster, slot: CardSlot) {
    draw_cell_background(layer, CODE_X_MM, slot.cell_top_mm());

    let size_px = raster.size;
    let image = Image::from(ImageXObject {
        width: Px(size_px as usize),
        height: Px(size_px as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: false,
        image_data: raster.pixels,
        image_filter: None,
        smask: None,
        clipping_bbox: None,
    });

    // native size at IMAGE_DPI, scaled up to fill the cell
    let native_mm = size_px as f32 * 25.4 / IMAGE_DPI;
    let scale = CELL_SIZE_MM / native_mm;
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(CODE_X_MM)),
            translate_y: Some(Mm(from_top_mm(slot.cell_top_mm() + CELL_SIZE_MM))),
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(IMAGE_DPI),
            ..Default::default()
        },
    );
}

fn palette_color((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    ))
}

fn draw_cell_background(layer: &PdfLayerReference, x_mm: f32, top_mm: f32) {
    layer.set_fill_color(palette_color(BACKGROUND_RGB));
    layer.set_outline_color(palette_color(ACCENT_RGB));
    layer.set_outline_thickness(0.5);

    let rect = Rect::new(
        Mm(x_mm),
        Mm(from_top_mm(top_mm + CELL_SIZE_MM)),
        Mm(x_mm + CELL_SIZE_MM),
        Mm(from_top_mm(top_mm)),
    )
    .with_mode(PaintMode::FillStroke);
    layer.add_rect(rect);
}

/// Draws `text` wrapped to the info cell width, one centered line per
/// `line_mm` band, top-down from `band_top_mm`.
fn draw_wrapped(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    font_pt: f32,
    band_top_mm: f32,
    line_mm: f32,
) {
    for (i, line) in textwrap::wrap(text, wrap_width_chars(font_pt)).iter().enumerate() {
        draw_centered_line(
            layer,
            font,
            line.as_ref(),
            font_pt,
            band_top_mm + i as f32 * line_mm,
            line_mm,
        );
    }
}

/// Draws one line horizontally centered in the info cell, vertically
/// centered in a band of `band_mm` starting at `band_top_mm`.
fn draw_centered_line(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    text: &str,
    font_pt: f32,
    band_top_mm: f32,
    band_mm: f32,
) {
    if text.is_empty() {
        return;
    }
    let baseline = band_top_mm + (band_mm + font_pt * CAP_HEIGHT_EM * PT_TO_MM) / 2.0;
    let x = INFO_X_MM + (CELL_SIZE_MM - text_width_mm(text, font_pt)) / 2.0;
    layer.use_text(
        text,
        font_pt,
        Mm(x.max(INFO_X_MM)),
        Mm(from_top_mm(baseline)),
        font,
    );
}

fn text_width_mm(text: &str, font_pt: f32) -> f32 {
    text.chars().count() as f32 * font_pt * AVG_GLYPH_EM * PT_TO_MM
}

fn wrap_width_chars(font_pt: f32) -> usize {
    let chars = CELL_SIZE_MM / (font_pt * AVG_GLYPH_EM * PT_TO_MM);
    (chars as usize).max(1)
}

/// Writes the document next to `out` and renames it into place, so the
/// caller either sees the complete PDF or the previous state of the path.
fn persist(doc: PdfDocumentReference, out: &Path) -> Result<(), RenderError> {
    let dir = match out.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;

    let mut writer = BufWriter::new(tmp.as_file());
    doc.save(&mut writer)?;
    writer.flush()?;
    drop(writer);

    tmp.persist(out)?;
    Ok(())
}
