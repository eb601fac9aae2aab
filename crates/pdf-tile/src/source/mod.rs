//! Source loading
//!
//! A source is decoded once into an RGB8 pixel buffer before any layout
//! happens. Raster files go through the `image` crate; PDF documents are
//! checked for a single page and rasterized at a fixed resolution.

mod document;
mod raster;

pub use document::{count_pages, document_dimensions, rasterize_document};
pub use raster::{decode_raster, raster_dimensions};

use crate::types::{Result, SourceImage};
use std::path::Path;

/// Memory layout of a decoded source buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit RGB, alpha already composited over white
    Rgb8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
        }
    }
}

/// Decoded source pixels
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRaster {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Bytes per row
    pub stride: usize,
    pub format: PixelFormat,
}

impl SourceRaster {
    pub fn dimensions(&self) -> SourceImage {
        SourceImage::new(self.width, self.height)
    }
}

/// Where a decoded source came from
#[derive(Debug)]
pub enum SourceLoadResult {
    /// Decoded from a raster image file
    Raster(SourceRaster),
    /// Rendered from a single-page document
    Rasterized(SourceRaster),
}

impl SourceLoadResult {
    pub fn into_raster(self) -> SourceRaster {
        match self {
            SourceLoadResult::Raster(raster) | SourceLoadResult::Rasterized(raster) => raster,
        }
    }
}

/// Whether the path names a PDF document (by extension, any case)
pub fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Load a source, choosing the decoder from the file extension
pub fn load_source(path: impl AsRef<Path>, dpi: f32) -> Result<SourceLoadResult> {
    let path = path.as_ref();
    if is_document(path) {
        log::debug!("Loading {} as a document at {} dpi", path.display(), dpi);
        Ok(SourceLoadResult::Rasterized(rasterize_document(path, dpi)?))
    } else {
        log::debug!("Loading {} as a raster image", path.display());
        Ok(SourceLoadResult::Raster(decode_raster(path)?))
    }
}

/// Pixel size `load_source` would produce, without decoding or rendering the source
pub fn source_dimensions(path: impl AsRef<Path>, dpi: f32) -> Result<SourceImage> {
    let path = path.as_ref();
    if is_document(path) {
        document_dimensions(path, dpi)
    } else {
        raster_dimensions(path)
    }
}
