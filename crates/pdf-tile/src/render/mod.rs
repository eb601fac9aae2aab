//! PDF rendering modules for tiling
//!
//! This module handles all PDF-specific operations:
//! - The `OutputSink` seam the composer draws through
//! - Creating image XObjects from decoded sources
//! - Content stream operators for placements and cut guides
//! - Assembling and writing the output document

mod guides;
mod pdf;
mod sink;
mod xobject;

pub use guides::cut_guide_ops;
pub use pdf::PdfSink;
pub use sink::{ImageHandle, OutputSink};
pub use xobject::create_image_xobject;
