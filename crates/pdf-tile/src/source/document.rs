//! Single-page document rasterization

use super::SourceRaster;
use crate::constants::POINTS_PER_INCH;
use crate::types::*;
use lopdf::{Document, Object, ObjectId};
use std::path::Path;

/// Number of pages in a PDF document
pub fn count_pages(path: impl AsRef<Path>) -> Result<usize> {
    let doc = Document::load(path.as_ref())?;
    Ok(doc.get_pages().len())
}

/// Render the only page of a PDF document at `dpi`.
///
/// Documents with any other page count are rejected before rendering.
pub fn rasterize_document(path: impl AsRef<Path>, dpi: f32) -> Result<SourceRaster> {
    let path = path.as_ref();
    let doc = Document::load(path)?;
    only_page(&doc)?;
    render_first_page(path, dpi)
}

/// Pixel size the only page would have when rendered at `dpi`, read from its
/// page box without rendering.
pub fn document_dimensions(path: impl AsRef<Path>, dpi: f32) -> Result<SourceImage> {
    let path = path.as_ref();
    let doc = Document::load(path)?;
    let page_id = only_page(&doc)?;

    let page_box = inherited(&doc, page_id, b"CropBox")
        .or_else(|| inherited(&doc, page_id, b"MediaBox"))
        .ok_or_else(|| {
            TileError::Unsupported(format!("{} has a page without a MediaBox", path.display()))
        })?;
    let (mut width, mut height) = box_size(page_box).ok_or_else(|| {
        TileError::Unsupported(format!("{} has a malformed page box", path.display()))
    })?;

    let rotate = inherited(&doc, page_id, b"Rotate")
        .and_then(|rotate| rotate.as_i64().ok())
        .unwrap_or(0);
    if rotate.rem_euclid(180) == 90 {
        std::mem::swap(&mut width, &mut height);
    }

    Ok(SourceImage::new(
        target_pixels(width, dpi) as u32,
        target_pixels(height, dpi) as u32,
    ))
}

/// The id of the document's single page
fn only_page(doc: &Document) -> Result<ObjectId> {
    let pages = doc.get_pages();
    match pages.values().next() {
        Some(&page_id) if pages.len() == 1 => Ok(page_id),
        _ => Err(TileError::PageCount { found: pages.len() }),
    }
}

/// A page attribute, looked up through the page tree parents
fn inherited<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
    let mut dict = doc.get_dictionary(page_id).ok()?;
    // Page trees are shallow; the bound stops reference cycles
    for _ in 0..32 {
        if let Ok(value) = dict.get(key) {
            return Some(value);
        }
        let parent = dict.get(b"Parent").and_then(Object::as_reference).ok()?;
        dict = doc.get_dictionary(parent).ok()?;
    }
    None
}

/// Width and height of a `[x0 y0 x1 y1]` rectangle
fn box_size(page_box: &Object) -> Option<(f32, f32)> {
    let coords = page_box
        .as_array()
        .ok()?
        .iter()
        .map(|value| value.as_float().ok())
        .collect::<Option<Vec<f32>>>()?;
    match coords.as_slice() {
        [x0, y0, x1, y1] => Some(((x1 - x0).abs(), (y1 - y0).abs())),
        _ => None,
    }
}

/// Pixel size of a page rendered at `dpi`
fn target_pixels(page_points: f32, dpi: f32) -> i32 {
    (page_points / POINTS_PER_INCH * dpi).round().max(1.0) as i32
}

#[cfg(feature = "pdfium")]
fn render_first_page(path: &Path, dpi: f32) -> Result<SourceRaster> {
    use pdfium_render::prelude::*;

    let pdfium = init_pdfium().map_err(|e| TileError::Rasterize(e.to_string()))?;
    let document = pdfium
        .load_pdf_from_file(path, None)
        .map_err(|e| TileError::Rasterize(e.to_string()))?;
    let page = document
        .pages()
        .get(0)
        .map_err(|e| TileError::Rasterize(e.to_string()))?;

    let width_px = target_pixels(page.width().value, dpi);
    let height_px = target_pixels(page.height().value, dpi);
    log::debug!(
        "Rendering {} at {}x{} px",
        path.display(),
        width_px,
        height_px
    );

    let config = PdfRenderConfig::new()
        .set_target_width(width_px)
        .set_maximum_height(height_px);
    let bitmap = page
        .render_with_config(&config)
        .map_err(|e| TileError::Rasterize(e.to_string()))?;

    super::raster::from_dynamic_image(&bitmap.as_image())
}

#[cfg(not(feature = "pdfium"))]
fn render_first_page(path: &Path, _dpi: f32) -> Result<SourceRaster> {
    Err(TileError::Unsupported(format!(
        "{} is a PDF, but this build has no pdfium support",
        path.display()
    )))
}

/// Initialize Pdfium, trying the vendored library first, then falling back to system
#[cfg(feature = "pdfium")]
fn init_pdfium() -> std::result::Result<pdfium_render::prelude::Pdfium, pdfium_render::prelude::PdfiumError>
{
    use pdfium_render::prelude::Pdfium;

    let vendor_path = std::env::current_dir().ok().and_then(|mut p| {
        p.push("vendor/pdfium/lib");
        if p.exists() { Some(p) } else { None }
    });

    if let Some(vendor_path) = vendor_path {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Pdfium::bind_to_system_library().map(Pdfium::new)
}
