use crate::constants::*;
use crate::layout::{GridSpec, plan_fixed_grid};
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How cells are sized and placed on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LayoutMode {
    /// Near-square grid sized from `images_per_page`, inside the margins
    #[default]
    Grid,
    /// Fixed 2 x 5 grid of 3.5in x 2in cards, centered, with cut guides
    BusinessCard,
}

/// Tiling configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TileOptions {
    // Input and output
    pub input: PathBuf,
    pub output: PathBuf,

    // Repetition
    /// Copies for an image source, pages for a document source
    pub repeats: usize,
    /// Cells per page in grid mode; ignored for business cards
    pub images_per_page: usize,

    // Page layout
    pub mode: LayoutMode,
    pub paper_size: PaperSize,
    pub margins: Margins,
    pub gap_pt: f32,

    // Placement
    /// Turn portrait sources by 90 degrees in grid mode. Business cards always do.
    pub auto_rotate: bool,

    // Document sources
    pub raster_dpi: f32,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            repeats: 1,
            images_per_page: 1,
            mode: LayoutMode::Grid,
            paper_size: PaperSize::Letter,
            margins: Margins::default(),
            gap_pt: DEFAULT_GAP_PT,
            auto_rotate: false,
            raster_dpi: DEFAULT_RASTER_DPI,
        }
    }
}

impl TileOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| TileError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TileError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// The output page these options describe
    pub fn page_spec(&self) -> PageSpec {
        PageSpec::new(self.paper_size, self.margins)
    }

    /// Whether orientation correction applies to every cell
    pub fn allow_rotate(&self) -> bool {
        match self.mode {
            LayoutMode::Grid => self.auto_rotate,
            LayoutMode::BusinessCard => true,
        }
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(TileError::Config("No input file specified".to_string()));
        }

        if self.output.as_os_str().is_empty() {
            return Err(TileError::Config("No output file specified".to_string()));
        }

        if self.repeats < 1 {
            return Err(TileError::Config(
                "Copies/pages must be at least 1".to_string(),
            ));
        }

        if self.mode == LayoutMode::Grid && self.images_per_page < 1 {
            return Err(TileError::Config(
                "Images per page must be at least 1".to_string(),
            ));
        }

        if !(self.raster_dpi > 0.0) {
            return Err(TileError::Config(format!(
                "Raster resolution must be positive, got {} dpi",
                self.raster_dpi
            )));
        }

        let page = self.page_spec();
        match self.mode {
            LayoutMode::Grid => {
                if !(page.usable_width() > 0.0 && page.usable_height() > 0.0) {
                    return Err(TileError::Config(format!(
                        "Margins leave no usable area on a {}x{}pt page",
                        page.width, page.height
                    )));
                }
                if self.gap_pt < 0.0 {
                    return Err(TileError::Config(format!(
                        "Gap must not be negative, got {}pt",
                        self.gap_pt
                    )));
                }
            }
            LayoutMode::BusinessCard => {
                let (grid_width, grid_height) = card_grid(page.width, page.height).footprint();
                if grid_width > page.width || grid_height > page.height {
                    return Err(TileError::Config(format!(
                        "Business card sheet ({}x{}pt) does not fit a {}x{}pt page",
                        grid_width, grid_height, page.width, page.height
                    )));
                }
            }
        }

        Ok(())
    }
}

/// The fixed business-card grid, centered on a page
pub(crate) fn card_grid(page_width: f32, page_height: f32) -> GridSpec {
    plan_fixed_grid(
        CARD_COLUMNS,
        CARD_ROWS,
        CARD_WIDTH_PT,
        CARD_HEIGHT_PT,
        CARD_GAP_PT,
        page_width,
        page_height,
    )
}
