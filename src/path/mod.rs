//! Waypoint paths: storage, arc-length sampling and start rotation.

mod optimizer;
mod polyline;
mod sampler;

pub use optimizer::optimize;
pub use polyline::Path;
pub use sampler::{CumulativeLengthTable, SampledPath, sample_at};
