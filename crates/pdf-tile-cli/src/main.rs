use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

mod logger;

use logger::CliLogger;

#[derive(Parser)]
#[command(
    name = "pdftile",
    about = "Tile copies of an image onto printable PDF pages",
    version
)]
struct Cli {
    /// Input image, or a single-page PDF
    input: PathBuf,

    /// Output PDF file [default: output.pdf]
    output: Option<PathBuf>,

    /// Number of pages to produce (copies of the filled grid) [default: 1]
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    copies: Option<u32>,

    /// Images per page, ignored with --business-card [default: 1]
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    images_per_page: Option<u32>,

    /// Lay out 3.5in x 2in business cards, 10 per page, with cut guides
    #[arg(long)]
    business_card: bool,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Page margin in points (uniform on all sides)
    #[arg(long)]
    margin: Option<f32>,

    /// Gap between images in points
    #[arg(long)]
    gap: Option<f32>,

    /// Turn portrait images sideways to fill the cells
    #[arg(long)]
    auto_rotate: bool,

    /// Resolution for rasterizing PDF input
    #[arg(long)]
    dpi: Option<f32>,

    /// JSON options file used as the base configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show the layout only, don't generate a PDF
    #[arg(long)]
    stats_only: bool,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    Letter,
    A4,
    Legal,
}

impl From<PaperArg> for pdf_tile::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::Letter => Self::Letter,
            PaperArg::A4 => Self::A4,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl Cli {
    /// Merge the command line over the base configuration
    fn into_options(self) -> Result<pdf_tile::TileOptions> {
        let mut options = match &self.config {
            Some(path) => pdf_tile::TileOptions::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => pdf_tile::TileOptions::default(),
        };

        options.input = self.input;
        if let Some(output) = self.output {
            options.output = output;
        }
        if let Some(copies) = self.copies {
            options.repeats = copies as usize;
        }
        if let Some(images_per_page) = self.images_per_page {
            options.images_per_page = images_per_page as usize;
        }

        if self.business_card {
            options.mode = pdf_tile::LayoutMode::BusinessCard;
        }
        if self.auto_rotate {
            options.auto_rotate = true;
        }
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }
        if let Some(margin) = self.margin {
            options.margins = pdf_tile::Margins::uniform(margin);
        }
        if let Some(gap) = self.gap {
            options.gap_pt = gap;
        }
        if let Some(dpi) = self.dpi {
            options.raster_dpi = dpi;
        }

        Ok(options)
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // --help and --version are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let level = CliLogger::level_for(cli.verbose, cli.quiet);
    if let Err(err) = CliLogger::new(level).init() {
        eprintln!("warning: logging unavailable: {}", err);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let stats_only = cli.stats_only;
    let options = cli.into_options()?;

    let stats = if stats_only {
        options.validate()?;
        let source = pdf_tile::source_dimensions(&options.input, options.raster_dpi)
            .with_context(|| format!("reading {}", options.input.display()))?;
        pdf_tile::calculate_statistics(&options, source)?
    } else {
        pdf_tile::tile(&options)
            .with_context(|| format!("tiling {}", options.input.display()))?
    };

    println!("Tiling Statistics:");
    println!("  Grid: {} x {}", stats.columns, stats.rows);
    println!(
        "  Cell size: {:.1} x {:.1} pt",
        stats.cell_width_pt, stats.cell_height_pt
    );
    println!("  Images per page: {}", stats.cells_per_page);
    if stats.empty_cells_per_page > 0 {
        println!("  Empty cells per page: {}", stats.empty_cells_per_page);
    }
    println!(
        "  Scale: {:.3}{}",
        stats.scale,
        if stats.rotated { " (rotated 90°)" } else { "" }
    );
    println!("  Output pages: {}", stats.output_pages);
    println!("  Total images: {}", stats.total_placements);

    if !stats_only {
        println!("Tiled → {}", options.output.display());
    }

    Ok(())
}
