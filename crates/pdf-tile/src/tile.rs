//! End-to-end tiling
//!
//! 1. Validate the options
//! 2. Decode the source (nothing is written if this fails)
//! 3. Plan the page and grid
//! 4. Create the PDF, embed the source once and compose every page

use crate::compose::{CompositionPlan, compose};
use crate::options::TileOptions;
use crate::render::{OutputSink, PdfSink};
use crate::source::load_source;
use crate::stats::plan_statistics;
use crate::types::*;

/// Tile the source named by `options.input` into `options.output`
pub fn tile(options: &TileOptions) -> Result<CompositionStatistics> {
    options.validate()?;

    let raster = load_source(&options.input, options.raster_dpi)?.into_raster();
    let source = raster.dimensions();
    log::info!(
        "Loaded {} ({}x{} px)",
        options.input.display(),
        source.width,
        source.height
    );

    let plan = CompositionPlan::from_options(options)?;
    log::info!(
        "Layout: {} x {} grid, {} per page, {} page(s)",
        plan.grid.columns,
        plan.grid.rows,
        plan.cell_count,
        plan.repeats
    );

    let mut sink = PdfSink::create(&options.output, plan.page.width, plan.page.height)?;
    let image = sink.register_image(&raster)?;
    compose(&mut sink, &plan, &image, source)?;

    // The pixels stay alive until the document is on disk
    drop(raster);

    Ok(plan_statistics(&plan, source))
}
