//! Detection simulation configuration section.

use serde::{Deserialize, Serialize};

use crate::core::Point3;
use crate::detection::DetectionModel;

use super::defaults;

/// Probabilistic detection section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectionSection {
    /// Track detection probability for the targets below
    #[serde(default)]
    pub enabled: bool,

    /// Probability of detection directly under the sensor
    #[serde(default = "defaults::base_probability")]
    pub base_probability: f32,

    /// Horizontal range beyond which detection is impossible (meters)
    #[serde(default = "defaults::detection_range")]
    pub range: f32,

    /// Blocked line of sight means no detection
    #[serde(default = "defaults::enabled")]
    pub require_line_of_sight: bool,

    /// Path samples per agent for offline estimation
    #[serde(default = "defaults::detection_samples")]
    pub samples: usize,

    /// RNG seed for detection rolls
    #[serde(default = "defaults::seed")]
    pub seed: u64,

    /// Ground targets
    #[serde(default)]
    pub targets: Vec<Point3>,
}

impl Default for DetectionSection {
    fn default() -> Self {
        Self {
            enabled: false,
            base_probability: defaults::base_probability(),
            range: defaults::detection_range(),
            require_line_of_sight: true,
            samples: defaults::detection_samples(),
            seed: defaults::seed(),
            targets: Vec::new(),
        }
    }
}

impl DetectionSection {
    /// Convert to the runtime model
    pub fn to_model(&self) -> DetectionModel {
        DetectionModel {
            base_probability: self.base_probability,
            range: self.range,
            require_line_of_sight: self.require_line_of_sight,
        }
    }
}
