//! Search area and planner configuration sections.

use serde::{Deserialize, Serialize};

use crate::core::{Bounds3, Point3};
use crate::planning::{PatternKind, ScanParams, SplitAxis};

use super::defaults;

/// Search area section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaSection {
    /// Area center (world)
    #[serde(default)]
    pub center: Point3,

    /// Full size; x and z span the ground, y is the vertical extent
    #[serde(default = "defaults::area_size")]
    pub size: Point3,
}

impl Default for AreaSection {
    fn default() -> Self {
        Self {
            center: Point3::ZERO,
            size: defaults::area_size(),
        }
    }
}

impl AreaSection {
    /// Search bounds
    pub fn bounds(&self) -> Bounds3 {
        Bounds3::from_center_size(self.center, self.size)
    }
}

/// Sweep planner section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Sweep pattern: horizontal, vertical, diagonal or spiral
    #[serde(default)]
    pub pattern: PatternKind,

    /// Axis the area is split along
    #[serde(default)]
    pub split_axis: SplitAxis,

    /// Footprint overlap between adjacent lines (0..1)
    #[serde(default = "defaults::overlap")]
    pub overlap: f32,

    /// Line spacing multiplier
    #[serde(default = "defaults::density")]
    pub density: f32,

    /// Flight altitude above terrain (meters)
    #[serde(default = "defaults::altitude")]
    pub altitude: f32,

    /// Fly the partition edges as well (horizontal pattern)
    #[serde(default)]
    pub add_edge_scans: bool,

    /// Sweep radius override; the swarm sensor radius when unset
    #[serde(default)]
    pub scan_radius: Option<f32>,

    /// Waypoint budget per agent path
    #[serde(default = "defaults::max_waypoints")]
    pub max_waypoints: usize,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            pattern: PatternKind::Horizontal,
            split_axis: SplitAxis::X,
            overlap: defaults::overlap(),
            density: defaults::density(),
            altitude: defaults::altitude(),
            add_edge_scans: false,
            scan_radius: None,
            max_waypoints: defaults::max_waypoints(),
        }
    }
}

impl PlannerSection {
    /// Runtime scan parameters for a sensor of the given radius
    pub fn to_scan_params(&self, sensor_radius: f32) -> ScanParams {
        ScanParams {
            scan_radius: self.scan_radius.unwrap_or(sensor_radius),
            overlap: self.overlap,
            density: self.density,
            altitude: self.altitude,
            add_edge_scans: self.add_edge_scans,
        }
    }
}
