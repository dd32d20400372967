//! Simulation run section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Tick loop settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSection {
    /// Simulated seconds per tick
    #[serde(default = "defaults::dt")]
    pub dt: f32,

    /// Stop after this many ticks even if the swarm is still flying
    #[serde(default = "defaults::max_ticks")]
    pub max_ticks: u64,
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            dt: defaults::dt(),
            max_ticks: defaults::max_ticks(),
        }
    }
}
