//! Mission state machine states.

use serde::{Deserialize, Serialize};

use crate::agent::AgentId;
use crate::core::Point3;

/// Per-agent mission phase
///
/// ```text
/// initialize --first waypoint--> Flying --arrived, queue not empty--> Flying
///     |                            |
///     |                            +----arrived, queue empty-------> Finished
///     +--empty path--------------------------------------------------> Finished
/// ```
///
/// The first waypoint is dispatched inside `MissionDriver::initialize`, so
/// an agent is never observed between path generation and its first target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AgentPhase {
    /// Flying to a waypoint
    Flying {
        /// Waypoint the agent was commanded to
        target: Point3,
    },

    /// Queue drained
    Finished,
}

impl AgentPhase {
    /// Is this a terminal phase?
    pub fn is_terminal(&self) -> bool {
        matches!(self, AgentPhase::Finished)
    }

    /// Current target, if flying
    pub fn target(&self) -> Option<Point3> {
        match self {
            AgentPhase::Flying { target } => Some(*target),
            _ => None,
        }
    }

    /// Phase name for logging
    pub fn name(&self) -> &'static str {
        match self {
            AgentPhase::Flying { .. } => "Flying",
            AgentPhase::Finished => "Finished",
        }
    }
}

/// Swarm-level state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SwarmState {
    /// At least one agent still has waypoints
    #[default]
    Running,
    /// Every agent is Finished
    AllFinished,
}

/// What happened during one driver tick
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MissionStep {
    /// New targets issued this tick
    pub dispatched: Vec<(AgentId, Point3)>,
    /// Agents that reached their target this tick
    pub arrived: Vec<AgentId>,
    /// Agents that drained their queue this tick
    pub finished: Vec<AgentId>,
    /// The swarm became AllFinished this tick
    pub all_finished: bool,
}

impl MissionStep {
    /// Nothing happened
    pub fn is_idle(&self) -> bool {
        self.dispatched.is_empty() && self.arrived.is_empty() && self.finished.is_empty()
    }
}

/// Per-agent progress snapshot
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AgentProgress {
    /// Agent index
    pub agent: AgentId,
    /// Phase name
    pub phase: &'static str,
    /// Waypoints reached so far
    pub waypoints_reached: usize,
    /// Waypoints still queued (current target excluded)
    pub waypoints_remaining: usize,
    /// Waypoints in the generated path
    pub waypoints_total: usize,
    /// Path length in meters
    pub path_length: f32,
}

impl AgentProgress {
    /// Reached / total, 1.0 for empty paths
    pub fn fraction(&self) -> f32 {
        if self.waypoints_total == 0 {
            1.0
        } else {
            self.waypoints_reached as f32 / self.waypoints_total as f32
        }
    }
}
