//! Path generation: pattern dispatch plus altitude assignment.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Bounds3, Point3};
use crate::error::{PlanError, Result};
use crate::path::Path;
use crate::world::{FlatTerrain, TerrainHeight};

use super::patterns::{PatternKind, SweepBuilder, SweepContext};

/// Smallest allowed spacing between sweep lines (meters).
pub const MIN_STEP: f32 = 0.01;

/// Default waypoint budget per generated path.
pub const DEFAULT_MAX_WAYPOINTS: usize = 200_000;

/// Sweep spacing and flight parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanParams {
    /// Sensor footprint radius on the ground
    pub scan_radius: f32,
    /// Fraction of the footprint shared by adjacent lines (0..1)
    pub overlap: f32,
    /// Multiplier on the line spacing (<1 denser, >1 sparser)
    pub density: f32,
    /// Flight height above terrain
    pub altitude: f32,
    /// Add perimeter legs to horizontal sweeps
    pub add_edge_scans: bool,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            scan_radius: 10.0,
            overlap: 0.2,
            density: 1.0,
            altitude: 30.0,
            add_edge_scans: false,
        }
    }
}

impl ScanParams {
    /// Footprint width after overlap: `2 * radius * (1 - overlap)`.
    pub fn effective_scan_width(&self) -> f32 {
        2.0 * self.scan_radius * (1.0 - self.overlap)
    }

    /// Line spacing, floored at [`MIN_STEP`] (NaN floors too).
    pub fn step(&self) -> f32 {
        let step = self.effective_scan_width() * self.density;
        if step.is_nan() || step < MIN_STEP {
            MIN_STEP
        } else {
            step
        }
    }
}

/// Turns partitions into waypoint paths.
pub struct PathGenerator<'a> {
    terrain: &'a dyn TerrainHeight,
    max_waypoints: usize,
}

impl Default for PathGenerator<'static> {
    fn default() -> Self {
        Self::new(&FlatTerrain)
    }
}

impl<'a> PathGenerator<'a> {
    /// Create a generator that follows `terrain`.
    pub fn new(terrain: &'a dyn TerrainHeight) -> Self {
        Self {
            terrain,
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
        }
    }

    /// Set the waypoint budget per path.
    pub fn with_max_waypoints(mut self, max_waypoints: usize) -> Self {
        self.max_waypoints = max_waypoints;
        self
    }

    /// Waypoint budget per path.
    pub fn max_waypoints(&self) -> usize {
        self.max_waypoints
    }

    /// Generate the sweep for one partition.
    ///
    /// A partition with no ground area yields an empty path. Every waypoint
    /// is placed at `terrain.height_at(x, z) + altitude`.
    pub fn generate(
        &self,
        pattern: PatternKind,
        partition: &Bounds3,
        global: &Bounds3,
        params: &ScanParams,
    ) -> Result<Path> {
        if !partition.is_valid() || !global.is_valid() {
            return Err(PlanError::invalid(format!(
                "cannot generate a path over invalid bounds {:?}",
                partition
            )));
        }
        if partition.is_flat() {
            warn!("[Planner] Partition {:?} has no ground area, empty path", partition);
            return Ok(Path::new());
        }

        let ctx = SweepContext {
            partition: *partition,
            global: *global,
            step: params.step(),
            add_edge_scans: params.add_edge_scans,
        };

        let strategy = pattern.strategy();
        let mut out = SweepBuilder::with_limit(self.max_waypoints);
        strategy.layout(&ctx, &mut out)?;

        let mut path = Path::new();
        for (x, z) in out.finish() {
            let y = self.terrain.height_at(x, z) + params.altitude;
            path.push(Point3::new(x, y, z));
        }

        debug!(
            "[Planner] {} sweep: {} waypoints, step {:.2}m, length {:.1}m",
            strategy.name(),
            path.len(),
            ctx.step,
            path.length()
        );

        Ok(path)
    }
}
