//! Grid layout calculation
//!
//! This module handles the geometric layout of the cell grid on a page:
//! the automatic near-square grid used for plain tiling, and the fixed-size
//! centered grid used for business cards.

use super::GridSpec;

// =============================================================================
// Grid Creation
// =============================================================================

/// Plan a near-square grid holding `cell_count` cells.
///
/// Columns are chosen first as `ceil(sqrt(cell_count))` and rows follow as
/// `ceil(cell_count / columns)`, so 5 cells give a 3 x 2 grid with one slot
/// left blank. The result is placed at the origin; use
/// [`GridSpec::at_origin`] to move it inside the page margins.
///
/// `cell_count` must be at least 1. Cell sizes are not clamped, so a gap too
/// wide for the usable area yields negative cell extents.
///
/// # Arguments
/// * `cell_count` - Number of cells required
/// * `usable_width` - Width available for the grid in points
/// * `usable_height` - Height available for the grid in points
/// * `gap` - Space between neighbouring cells in points
pub fn plan_grid(cell_count: usize, usable_width: f32, usable_height: f32, gap: f32) -> GridSpec {
    let columns = ceil_sqrt(cell_count);
    let rows = cell_count.div_ceil(columns);

    let cell_width = (usable_width - (columns - 1) as f32 * gap) / columns as f32;
    let cell_height = (usable_height - (rows - 1) as f32 * gap) / rows as f32;

    GridSpec {
        columns,
        rows,
        cell_width,
        cell_height,
        gap,
        origin_x: 0.0,
        origin_y: 0.0,
    }
}

/// Plan a grid of fixed-size cells centered on the page.
///
/// Margins play no part: the footprint of the cells and gaps is centered on
/// the full page.
pub fn plan_fixed_grid(
    columns: usize,
    rows: usize,
    cell_width: f32,
    cell_height: f32,
    gap: f32,
    page_width: f32,
    page_height: f32,
) -> GridSpec {
    let grid = GridSpec {
        columns,
        rows,
        cell_width,
        cell_height,
        gap,
        origin_x: 0.0,
        origin_y: 0.0,
    };

    let (grid_width, grid_height) = grid.footprint();
    grid.at_origin(
        (page_width - grid_width) / 2.0,
        (page_height - grid_height) / 2.0,
    )
}

/// Smallest `c` with `c * c >= n`, and at least 1
fn ceil_sqrt(n: usize) -> usize {
    let root = n.isqrt();
    if root * root >= n { root.max(1) } else { root + 1 }
}

// =============================================================================
// Tests
// =============================================================================
