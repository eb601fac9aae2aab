//! Shared constants for page tiling
//!
//! This module centralizes magic numbers and constants used throughout
//! layout and rendering.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

// =============================================================================
// Default Page Layout
// =============================================================================

/// Default margin on every side of the page (points)
pub const DEFAULT_MARGIN_PT: f32 = 10.0;

/// Default gap between neighbouring cells (points)
pub const DEFAULT_GAP_PT: f32 = 5.0;

/// Default output file name
pub const DEFAULT_OUTPUT_FILE: &str = "output.pdf";

// =============================================================================
// Business Cards
// =============================================================================

/// Card columns per page
pub const CARD_COLUMNS: usize = 2;

/// Card rows per page
pub const CARD_ROWS: usize = 5;

/// Card width (3.5 in)
pub const CARD_WIDTH_PT: f32 = 3.5 * POINTS_PER_INCH;

/// Card height (2.0 in)
pub const CARD_HEIGHT_PT: f32 = 2.0 * POINTS_PER_INCH;

/// Gap between cards (0.25 in)
pub const CARD_GAP_PT: f32 = 0.25 * POINTS_PER_INCH;

// =============================================================================
// Cut Guides
// =============================================================================

/// Line width for cut guides (points)
pub const CUT_GUIDE_WIDTH: f32 = 0.5;

/// Gray level for cut guides (0 = black, 1 = white)
pub const CUT_GUIDE_GRAY: f32 = 0.5;

/// Dash pattern for cut guides: 2pt dash, 2pt gap
pub const CUT_GUIDE_DASH: &str = "[2 2] 0 d";

// =============================================================================
// Sources
// =============================================================================

/// Resolution used when rasterizing a PDF source
pub const DEFAULT_RASTER_DPI: f32 = 300.0;
