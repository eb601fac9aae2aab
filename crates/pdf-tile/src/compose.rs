//! Page composition
//!
//! Drives `repeats x cells` placements through an [`OutputSink`]:
//! 1. Plan the page and grid once from the options
//! 2. Fit the source into every cell, row by row
//! 3. Commit a page between repeats and finalize after the last one

use crate::layout::{GridSpec, fit_cell, plan_grid};
use crate::options::{LayoutMode, TileOptions, card_grid};
use crate::render::{ImageHandle, OutputSink};
use crate::types::*;

/// Everything the composer needs, computed once per run
#[derive(Debug, Clone, PartialEq)]
pub struct CompositionPlan {
    pub page: PageSpec,
    pub grid: GridSpec,
    /// Cells filled on every page
    pub cell_count: usize,
    /// Pages produced (copies or document pages)
    pub repeats: usize,
    /// Orientation correction for portrait sources
    pub allow_rotate: bool,
    /// Dotted guides around every cell
    pub cut_guides: bool,
}

impl CompositionPlan {
    /// Plan the page and grid described by validated options
    pub fn from_options(options: &TileOptions) -> Result<Self> {
        let page = options.page_spec();

        let (grid, cell_count, cut_guides) = match options.mode {
            LayoutMode::Grid => {
                let grid = plan_grid(
                    options.images_per_page,
                    page.usable_width(),
                    page.usable_height(),
                    options.gap_pt,
                )
                .at_origin(page.margins.left, page.margins.top);
                (grid, options.images_per_page, false)
            }
            LayoutMode::BusinessCard => {
                let grid = card_grid(page.width, page.height);
                (grid, grid.cell_count(), true)
            }
        };

        if !(grid.cell_width > 0.0 && grid.cell_height > 0.0) {
            return Err(TileError::Config(format!(
                "{} images per page leave no room for a cell ({}x{}pt)",
                cell_count, grid.cell_width, grid.cell_height
            )));
        }

        Ok(Self {
            page,
            grid,
            cell_count,
            repeats: options.repeats,
            allow_rotate: options.allow_rotate(),
            cut_guides,
        })
    }
}

/// Where the composer is in its page cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    /// A fresh page with nothing drawn
    Empty,
    /// At least one cell drawn on the current page
    Drawing,
    /// All cells drawn; the page waits for a commit or finalize
    PageReady,
    /// The document has been written
    Finalized,
}

/// Issues draw, commit and finalize commands for one run
pub struct PageComposer<'a, S: OutputSink> {
    sink: &'a mut S,
    plan: &'a CompositionPlan,
    state: ComposerState,
}

impl<'a, S: OutputSink> PageComposer<'a, S> {
    pub fn new(sink: &'a mut S, plan: &'a CompositionPlan) -> Self {
        Self {
            sink,
            plan,
            state: ComposerState::Empty,
        }
    }

    pub fn state(&self) -> ComposerState {
        self.state
    }

    /// Fill every page and finalize the document
    pub fn run(&mut self, image: &ImageHandle, source: SourceImage) -> Result<()> {
        for repeat in 0..self.plan.repeats {
            log::debug!("Composing page {}/{}", repeat + 1, self.plan.repeats);

            self.fill_page(image, source)?;
            if repeat + 1 < self.plan.repeats {
                self.next_page()?;
            }
        }
        self.finalize()
    }

    /// Draw every cell of the current page
    pub fn fill_page(&mut self, image: &ImageHandle, source: SourceImage) -> Result<()> {
        if self.state != ComposerState::Empty {
            return Err(TileError::InvalidState("page is not empty"));
        }

        for cell in self.plan.grid.cells(self.plan.cell_count) {
            let transform = fit_cell(&cell, source, self.plan.allow_rotate);
            self.sink
                .draw_image(image, &transform.to_affine(source))?;
            self.state = ComposerState::Drawing;

            if self.plan.cut_guides {
                self.sink.stroke_guide(&cell)?;
            }
        }

        self.state = ComposerState::PageReady;
        Ok(())
    }

    /// Commit the finished page and start an empty one
    pub fn next_page(&mut self) -> Result<()> {
        if self.state != ComposerState::PageReady {
            return Err(TileError::InvalidState("no finished page to commit"));
        }
        self.sink.commit_page()?;
        self.state = ComposerState::Empty;
        Ok(())
    }

    /// Leave the last page to the sink and write the document
    pub fn finalize(&mut self) -> Result<()> {
        if self.state != ComposerState::PageReady {
            return Err(TileError::InvalidState("no finished page to finalize"));
        }
        self.sink.finalize()?;
        self.state = ComposerState::Finalized;
        Ok(())
    }
}

/// Compose the whole document for one registered image
pub fn compose<S: OutputSink>(
    sink: &mut S,
    plan: &CompositionPlan,
    image: &ImageHandle,
    source: SourceImage,
) -> Result<()> {
    PageComposer::new(sink, plan).run(image, source)
}
