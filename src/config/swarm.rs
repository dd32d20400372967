//! Swarm configuration section.

use serde::{Deserialize, Serialize};

use crate::agent::SensorFootprint;
use crate::core::{Bounds3, Point3};

use super::defaults;

/// Simulated swarm section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SwarmSection {
    /// Number of agents
    #[serde(default = "defaults::agent_count")]
    pub agent_count: usize,

    /// Cruise speed (m/s)
    #[serde(default = "defaults::speed")]
    pub speed: f32,

    /// Distance at which a target counts as reached (meters)
    #[serde(default = "defaults::arrival_tolerance")]
    pub arrival_tolerance: f32,

    /// Sensor footprint shared by all agents
    #[serde(default)]
    pub sensor: SensorFootprint,

    /// Launch altitude
    #[serde(default)]
    pub spawn_altitude: f32,
}

impl Default for SwarmSection {
    fn default() -> Self {
        Self {
            agent_count: defaults::agent_count(),
            speed: defaults::speed(),
            arrival_tolerance: defaults::arrival_tolerance(),
            sensor: SensorFootprint::default(),
            spawn_altitude: 0.0,
        }
    }
}

impl SwarmSection {
    /// Launch positions spread along the area's min.z edge
    pub fn spawn_points(&self, area: &Bounds3) -> Vec<Point3> {
        let n = self.agent_count.max(1) as f32;
        (0..self.agent_count)
            .map(|i| {
                let x = area.min.x + (i as f32 + 0.5) * area.width() / n;
                Point3::new(x, self.spawn_altitude, area.min.z)
            })
            .collect()
    }
}
