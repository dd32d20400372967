//! Core geometry types.
//!
//! - [`Point3`]: world-space point / vector (X, Z ground plane, Y up)
//! - [`Bounds3`]: axis-aligned box for search areas and partitions
//! - [`GridCoord`]: integer cell index on the coverage grid
//! - [`CoverageStatus`]: per-cell observation state

mod bounds;
mod cell;
mod point;

pub use bounds::Bounds3;
pub use cell::CoverageStatus;
pub use point::{GridCoord, Point3};

/// A waypoint is a world-space point; its meaning comes from its position in a path.
pub type Waypoint = Point3;
