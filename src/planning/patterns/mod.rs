//! Sweep pattern strategies.
//!
//! Each pattern turns a partition into an ordered list of ground-plane
//! points. Altitude is applied afterwards by the generator, so strategies
//! only deal with (x, z).
//!
//! | Pattern | Shape |
//! |---------|-------|
//! | [`HorizontalSweep`] | Rows of constant z, alternating direction (lawnmower) |
//! | [`VerticalSweep`] | Columns of constant x, alternating direction |
//! | [`DiagonalSweep`] | 45 degree lines clipped to the partition |
//! | [`SpiralSweep`] | Inward rectangular rings |
//!
//! New patterns implement [`PatternStrategy`] and get a [`PatternKind`]
//! variant for configuration.

mod diagonal;
mod horizontal;
mod spiral;
mod vertical;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Bounds3;
use crate::error::{PlanError, Result};

pub use diagonal::DiagonalSweep;
pub use horizontal::HorizontalSweep;
pub use spiral::SpiralSweep;
pub use vertical::VerticalSweep;

/// Everything a strategy needs to lay out one partition.
#[derive(Clone, Copy, Debug)]
pub struct SweepContext {
    /// Region assigned to this agent
    pub partition: Bounds3,
    /// Whole search area (row phase and cross extent come from here)
    pub global: Bounds3,
    /// Distance between adjacent sweep lines (already floored)
    pub step: f32,
    /// Add perimeter legs (horizontal pattern only)
    pub add_edge_scans: bool,
}

/// Collects ground-plane points and enforces the waypoint budget.
#[derive(Debug)]
pub struct SweepBuilder {
    points: Vec<(f32, f32)>,
    limit: usize,
}

impl SweepBuilder {
    /// Create a builder that refuses to grow beyond `limit` points.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            points: Vec::new(),
            limit,
        }
    }

    /// Append a point.
    pub fn emit(&mut self, x: f32, z: f32) -> Result<()> {
        if self.points.len() >= self.limit {
            return Err(PlanError::WaypointLimit {
                generated: self.points.len() + 1,
                limit: self.limit,
            });
        }
        self.points.push((x, z));
        Ok(())
    }

    /// Append a two-point line, reversed when `forward` is false.
    pub fn emit_line(&mut self, a: (f32, f32), b: (f32, f32), forward: bool) -> Result<()> {
        let (first, second) = if forward { (a, b) } else { (b, a) };
        self.emit(first.0, first.1)?;
        self.emit(second.0, second.1)
    }

    /// Points emitted so far.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Nothing emitted yet.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Finish and return the points.
    pub fn finish(self) -> Vec<(f32, f32)> {
        self.points
    }
}

/// A sweep layout algorithm.
pub trait PatternStrategy {
    /// Short lowercase name used in logs.
    fn name(&self) -> &'static str;

    /// Emit the ground-plane points for one partition in flight order.
    fn layout(&self, ctx: &SweepContext, out: &mut SweepBuilder) -> Result<()>;
}

/// Configurable pattern selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// Lawnmower rows
    #[default]
    Horizontal,
    /// Lawnmower columns
    Vertical,
    /// 45 degree lines
    Diagonal,
    /// Inward rings
    Spiral,
}

impl PatternKind {
    /// All patterns in declaration order.
    pub const ALL: [PatternKind; 4] = [
        PatternKind::Horizontal,
        PatternKind::Vertical,
        PatternKind::Diagonal,
        PatternKind::Spiral,
    ];

    /// Strategy implementing this pattern.
    pub fn strategy(self) -> &'static dyn PatternStrategy {
        match self {
            PatternKind::Horizontal => &HorizontalSweep,
            PatternKind::Vertical => &VerticalSweep,
            PatternKind::Diagonal => &DiagonalSweep,
            PatternKind::Spiral => &SpiralSweep,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        self.strategy().name()
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "lawnmower" => Ok(PatternKind::Horizontal),
            "vertical" => Ok(PatternKind::Vertical),
            "diagonal" => Ok(PatternKind::Diagonal),
            "spiral" => Ok(PatternKind::Spiral),
            other => Err(PlanError::invalid(format!("unknown sweep pattern '{other}'"))),
        }
    }
}
