//! Cut guide rendering
//!
//! Generates PDF content stream operations for the dotted rectangles drawn
//! around business cards.

use crate::constants::{CUT_GUIDE_DASH, CUT_GUIDE_GRAY, CUT_GUIDE_WIDTH};
use crate::layout::CellBox;

/// Content stream operations for a dotted rectangle around `cell`.
///
/// `page_height` converts the top-left cell box into PDF's bottom-left space.
pub fn cut_guide_ops(cell: &CellBox, page_height: f32) -> String {
    let mut ops = String::new();

    // Save graphics state
    ops.push_str("q\n");

    ops.push_str(&format!("{} G\n", CUT_GUIDE_GRAY));
    ops.push_str(&format!("{} w\n", CUT_GUIDE_WIDTH));
    ops.push_str(CUT_GUIDE_DASH);
    ops.push('\n');

    let bottom = page_height - cell.bottom();
    ops.push_str(&format!(
        "{} {} {} {} re S\n",
        cell.x, bottom, cell.width, cell.height
    ));

    // Restore graphics state
    ops.push_str("Q\n");

    ops
}
