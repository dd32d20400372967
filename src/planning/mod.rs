//! Coverage planning: area partitioning and sweep path generation.
//!
//! ```text
//! search area --partition()--> [Bounds3; n] --PathGenerator--> [Path; n]
//!                                                 |
//!                                   PatternKind -> &dyn PatternStrategy
//! ```

pub mod generator;
pub mod partition;
pub mod patterns;

pub use generator::{DEFAULT_MAX_WAYPOINTS, MIN_STEP, PathGenerator, ScanParams};
pub use partition::{SplitAxis, partition};
pub use patterns::{
    DiagonalSweep, HorizontalSweep, PatternKind, PatternStrategy, SpiralSweep, SweepBuilder,
    SweepContext, VerticalSweep,
};
