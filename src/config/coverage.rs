//! Coverage grid configuration section.

use serde::{Deserialize, Serialize};

use crate::coverage::CoverageSettings;

use super::defaults;

/// Coverage evaluation section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoverageSection {
    /// Cell size (meters)
    #[serde(default = "defaults::resolution")]
    pub resolution: f32,

    /// Max vertical distance between agent and cell (meters)
    #[serde(default = "defaults::detection_height")]
    pub detection_height: f32,

    /// Line-of-sight check per cell (the occlusion precheck always runs)
    #[serde(default = "defaults::enabled")]
    pub occlusion_detection: bool,

    /// Height above the cell center the line-of-sight ray aims at
    #[serde(default = "defaults::los_offset")]
    pub los_offset: f32,

    /// Seconds between evaluation passes
    #[serde(default = "defaults::evaluation_interval")]
    pub evaluation_interval: f32,

    /// Refuse to build grids larger than this
    #[serde(default = "defaults::max_cells")]
    pub max_cells: usize,
}

impl Default for CoverageSection {
    fn default() -> Self {
        Self {
            resolution: defaults::resolution(),
            detection_height: defaults::detection_height(),
            occlusion_detection: true,
            los_offset: defaults::los_offset(),
            evaluation_interval: defaults::evaluation_interval(),
            max_cells: defaults::max_cells(),
        }
    }
}

impl CoverageSection {
    /// Convert to runtime settings
    pub fn to_settings(&self) -> CoverageSettings {
        CoverageSettings {
            resolution: self.resolution,
            detection_height: self.detection_height,
            occlusion_detection: self.occlusion_detection,
            los_offset: self.los_offset,
            evaluation_interval: self.evaluation_interval,
            max_cells: self.max_cells,
        }
    }
}
