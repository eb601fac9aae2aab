//! Layout calculation modules for tiling
//!
//! This module handles all the geometric calculations for placing copies
//! of a source on the page:
//! - Grid planning (cell count, cell size, grid origin)
//! - Cell fitting (uniform scale, centering, orientation correction)
//! - Affine transforms handed to the output sink

mod fit;
mod grid;
mod types;

pub use fit::*;
pub use grid::*;
pub use types::*;
