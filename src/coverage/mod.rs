//! Grid-based coverage tracking.
//!
//! - [`CoverageGrid`]: SoA cell storage over the search area
//! - [`CoverageEvaluator`]: occlusion precheck plus periodic footprint passes
//! - [`CoverageStats`]: raw and effective coverage numbers

mod evaluator;
mod grid;
mod stats;

pub use evaluator::{CoverageEvaluator, CoverageSettings};
pub use grid::CoverageGrid;
pub use stats::CoverageStats;
