//! Content placement within cells
//!
//! This module handles fitting the source into a single cell:
//! - Orientation correction for portrait sources
//! - Uniform scaling (aspect ratio is always preserved)
//! - Centering inside the cell

use crate::types::SourceImage;

use super::{Affine, CellBox, CellTransform};

/// Calculate how the source is placed inside a cell.
///
/// When `allow_rotate` is set and the source is portrait, its width and
/// height are swapped for fitting and the transform is flagged `rotate90`.
/// The scale is the largest that keeps the (oriented) source inside the cell;
/// it is not capped at 1, so small sources are enlarged.
///
/// # Arguments
/// * `cell` - The cell bounds
/// * `source` - Pixel dimensions of the source
/// * `allow_rotate` - Whether orientation correction may be applied
pub fn fit_cell(cell: &CellBox, source: SourceImage, allow_rotate: bool) -> CellTransform {
    let rotate90 = allow_rotate && source.is_portrait();
    let (oriented_width, oriented_height) = oriented_size(source, rotate90);

    let scale = (cell.width / oriented_width).min(cell.height / oriented_height);

    let draw_width = oriented_width * scale;
    let draw_height = oriented_height * scale;

    let offset_x = (cell.width - draw_width) / 2.0;
    let offset_y = (cell.height - draw_height) / 2.0;

    CellTransform {
        translate_x: cell.x + offset_x,
        translate_y: cell.y + offset_y,
        scale,
        rotate90,
    }
}

/// Source size as laid out on the page, before scaling
fn oriented_size(source: SourceImage, rotate90: bool) -> (f32, f32) {
    if rotate90 {
        (source.height as f32, source.width as f32)
    } else {
        (source.width as f32, source.height as f32)
    }
}

impl CellTransform {
    /// Size of the placed source on the page
    pub fn draw_size(&self, source: SourceImage) -> (f32, f32) {
        let (width, height) = oriented_size(source, self.rotate90);
        (width * self.scale, height * self.scale)
    }

    /// Matrix mapping source pixel space (y down) to page space (y down).
    ///
    /// The rotation is composed innermost so the uniform scale acts on the
    /// already-turned source.
    pub fn to_affine(&self, source: SourceImage) -> Affine {
        let placement =
            Affine::scale(self.scale).then(Affine::translate(self.translate_x, self.translate_y));

        if self.rotate90 {
            Affine::rotate90()
                .then(Affine::translate(source.height as f32, 0.0))
                .then(placement)
        } else {
            placement
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_source_is_centered_vertically() {
        let cell = CellBox::new(10.0, 10.0, 400.0, 400.0);
        let t = fit_cell(&cell, SourceImage::new(400, 200), false);

        assert_eq!(t.scale, 1.0);
        assert!(!t.rotate90);
        assert_eq!(t.translate_x, 10.0);
        assert_eq!(t.translate_y, 110.0);
    }

    #[test]
    fn test_portrait_source_rotates_when_allowed() {
        let cell = CellBox::new(0.0, 0.0, 800.0, 400.0);
        let t = fit_cell(&cell, SourceImage::new(200, 800), true);

        assert!(t.rotate90);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.draw_size(SourceImage::new(200, 800)), (800.0, 200.0));
        assert_eq!(t.translate_y, 100.0);
    }

    #[test]
    fn test_portrait_source_kept_upright_without_rotation() {
        let cell = CellBox::new(0.0, 0.0, 800.0, 400.0);
        let t = fit_cell(&cell, SourceImage::new(200, 800), false);

        assert!(!t.rotate90);
        assert_eq!(t.scale, 0.5);
        assert_eq!(t.translate_x, 350.0);
    }

    #[test]
    fn test_small_source_is_enlarged() {
        let cell = CellBox::new(0.0, 0.0, 300.0, 300.0);
        let t = fit_cell(&cell, SourceImage::new(10, 30), false);

        assert_eq!(t.scale, 10.0);
    }

    #[test]
    fn test_affine_maps_corners_into_cell() {
        let source = SourceImage::new(200, 800);
        let cell = CellBox::new(0.0, 0.0, 800.0, 400.0);
        let m = fit_cell(&cell, source, true).to_affine(source);

        // Top-left pixel lands at the top-right of the drawn area
        assert_eq!(m.apply(0.0, 0.0), (800.0, 100.0));
        // Bottom-left pixel lands at the top-left
        assert_eq!(m.apply(0.0, 800.0), (0.0, 100.0));
        // Top-right pixel lands at the bottom-right
        assert_eq!(m.apply(200.0, 0.0), (800.0, 300.0));
    }
}
