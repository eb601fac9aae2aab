//! Output sink abstraction

use crate::layout::{Affine, CellBox};
use crate::source::SourceRaster;
use crate::types::Result;

/// Reference to an image registered with a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHandle {
    /// Position in registration order
    pub index: usize,
    /// Pixel width of the registered image
    pub width: u32,
    /// Pixel height of the registered image
    pub height: u32,
}

/// A paginated document writer.
///
/// Coordinates passed to a sink are page points with the origin at the top-left
/// corner and y growing downwards. Any error is fatal for the run.
pub trait OutputSink {
    /// Make a decoded source available for drawing on any page
    fn register_image(&mut self, raster: &SourceRaster) -> Result<ImageHandle>;

    /// Paint an image; `transform` maps its pixel space onto the page
    fn draw_image(&mut self, image: &ImageHandle, transform: &Affine) -> Result<()>;

    /// Stroke a dotted cut guide around a cell
    fn stroke_guide(&mut self, cell: &CellBox) -> Result<()>;

    /// Close the current page and start a new one
    fn commit_page(&mut self) -> Result<()>;

    /// Close the last page and write the document
    fn finalize(&mut self) -> Result<()>;
}
