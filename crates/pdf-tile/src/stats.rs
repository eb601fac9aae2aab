use crate::compose::CompositionPlan;
use crate::layout::fit_cell;
use crate::options::TileOptions;
use crate::types::*;

/// Calculate statistics for tiling `source` with `options`, without writing anything
pub fn calculate_statistics(
    options: &TileOptions,
    source: SourceImage,
) -> Result<CompositionStatistics> {
    options.validate()?;
    let plan = CompositionPlan::from_options(options)?;
    Ok(plan_statistics(&plan, source))
}

/// Statistics for an existing plan
pub(crate) fn plan_statistics(plan: &CompositionPlan, source: SourceImage) -> CompositionStatistics {
    // Every cell has the same size, so the first one speaks for all
    let transform = fit_cell(&plan.grid.cell_box(0), source, plan.allow_rotate);

    CompositionStatistics {
        output_pages: plan.repeats,
        cells_per_page: plan.cell_count,
        columns: plan.grid.columns,
        rows: plan.grid.rows,
        empty_cells_per_page: plan.grid.cell_count() - plan.cell_count,
        cell_width_pt: plan.grid.cell_width,
        cell_height_pt: plan.grid.cell_height,
        scale: transform.scale,
        rotated: transform.rotate90,
        total_placements: plan.repeats * plan.cell_count,
    }
}
