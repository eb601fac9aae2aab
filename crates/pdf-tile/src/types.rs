use std::collections::TryReserveError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("Input document must have exactly one page, found {found}")]
    PageCount { found: usize },
    #[error("Source image has no pixels")]
    EmptyImage,
    #[error("Rasterization failed: {0}")]
    Rasterize(String),
    #[error("Unsupported input: {0}")]
    Unsupported(String),
    #[error("Cannot create output {}: {source}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write output: {0}")]
    OutputWrite(#[source] std::io::Error),
    #[error("Invalid output state: {0}")]
    InvalidState(&'static str),
    #[error("Out of memory allocating image buffer: {0}")]
    Resource(#[from] TryReserveError),
}

/// Broad failure classes, used by callers to report errors consistently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad arguments or options; nothing was read or written
    Usage,
    /// The source could not be read, decoded or accepted
    Input,
    /// The output could not be created or written
    Output,
    /// An intermediate buffer could not be allocated
    Resource,
}

impl TileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TileError::Config(_) => ErrorKind::Usage,
            TileError::Io(_)
            | TileError::Image(_)
            | TileError::Pdf(_)
            | TileError::PageCount { .. }
            | TileError::EmptyImage
            | TileError::Rasterize(_)
            | TileError::Unsupported(_) => ErrorKind::Input,
            TileError::OutputCreate { .. }
            | TileError::OutputWrite(_)
            | TileError::InvalidState(_) => ErrorKind::Output,
            TileError::Resource(_) => ErrorKind::Resource,
        }
    }
}

pub type Result<T> = std::result::Result<T, TileError>;

/// Standard paper sizes, in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
    Legal,
    Custom { width_pt: f32, height_pt: f32 },
}

impl PaperSize {
    /// Portrait dimensions (width, height) in points
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::A4 => (595.28, 841.89),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Custom {
                width_pt,
                height_pt,
            } => (width_pt, height_pt),
        }
    }
}

/// Page margins in points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(crate::constants::DEFAULT_MARGIN_PT)
    }
}

impl Margins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_pt: f32) -> Self {
        Self {
            top: margin_pt,
            left: margin_pt,
            right: margin_pt,
            bottom: margin_pt,
        }
    }
}

/// The physical output page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    pub width: f32,
    pub height: f32,
    pub margins: Margins,
}

impl PageSpec {
    pub fn new(paper: PaperSize, margins: Margins) -> Self {
        let (width, height) = paper.dimensions_pt();
        Self {
            width,
            height,
            margins,
        }
    }

    /// Width left for content once the side margins are removed
    pub fn usable_width(&self) -> f32 {
        self.width - self.margins.left - self.margins.right
    }

    /// Height left for content once the top and bottom margins are removed
    pub fn usable_height(&self) -> f32 {
        self.height - self.margins.top - self.margins.bottom
    }
}

/// Intrinsic pixel dimensions of the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
}

impl SourceImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}

/// Summary of a composition, available before anything is written
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionStatistics {
    /// Number of pages in the output document
    pub output_pages: usize,
    /// Images placed on each page
    pub cells_per_page: usize,
    pub columns: usize,
    pub rows: usize,
    /// Grid slots left blank on each page
    pub empty_cells_per_page: usize,
    pub cell_width_pt: f32,
    pub cell_height_pt: f32,
    /// Uniform scale applied to the source in every cell
    pub scale: f32,
    /// Whether the source is turned 90 degrees to fit the cells
    pub rotated: bool,
    /// Total draw commands across the document
    pub total_placements: usize,
}
