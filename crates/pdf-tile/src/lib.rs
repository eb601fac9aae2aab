pub mod compose;
mod constants;
pub mod layout;
mod options;
pub mod render;
pub mod source;
mod stats;
mod tile;
mod types;

pub use compose::{ComposerState, CompositionPlan, PageComposer, compose};
pub use constants::*;
pub use options::*;
pub use source::{SourceLoadResult, SourceRaster, load_source, source_dimensions};
pub use stats::calculate_statistics;
pub use tile::tile;
pub use types::*;
