//! Agent capability interface.
//!
//! The planner and the coverage evaluator see an agent only through
//! [`SearchAgent`]: where it is, whether it has reached its current target,
//! how to give it a new one, and what its sensor can see. Flight control,
//! rendering and everything else stays on the host side.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Point3;

/// Stable agent index assigned at initialization (position in the agent slice).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AgentId(pub usize);

impl AgentId {
    /// Index into per-agent vectors.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent-{}", self.0)
    }
}

/// Sensor footprint geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SensorShape {
    /// Vertical cylinder below the agent: horizontal distance <= radius.
    #[default]
    Cylinder,
    /// Downward cone with its apex at the agent.
    Cone {
        /// Full opening angle in degrees.
        angle_deg: f32,
    },
}

/// Sensor radius plus shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SensorFootprint {
    /// Range in meters: horizontal for a cylinder, slant for a cone.
    pub radius: f32,
    /// Footprint geometry.
    pub shape: SensorShape,
}

impl SensorFootprint {
    /// Cylinder footprint.
    pub fn cylinder(radius: f32) -> Self {
        Self {
            radius,
            shape: SensorShape::Cylinder,
        }
    }

    /// Cone footprint with the given full opening angle.
    pub fn cone(radius: f32, angle_deg: f32) -> Self {
        Self {
            radius,
            shape: SensorShape::Cone { angle_deg },
        }
    }

    /// Is `point` inside the footprint of a sensor mounted at `sensor`?
    ///
    /// Cylinder: horizontal distance <= radius.
    /// Cone: angle between (point - sensor) and straight down <= half the
    /// opening angle, and straight-line distance from the sensor <= radius.
    /// Points above the sensor are never inside a cone.
    pub fn contains(&self, sensor: Point3, point: Point3) -> bool {
        match self.shape {
            SensorShape::Cylinder => sensor.horizontal_distance(&point) <= self.radius,
            SensorShape::Cone { angle_deg } => {
                let offset = point - sensor;
                if offset.y > 0.0 {
                    return false;
                }
                let distance = offset.length();
                if distance > self.radius {
                    return false;
                }
                if distance <= f32::EPSILON {
                    return true;
                }
                let half_angle = (angle_deg * 0.5).to_radians();
                Point3::DOWN.angle_between(&offset) <= half_angle
            }
        }
    }
}

impl Default for SensorFootprint {
    fn default() -> Self {
        Self::cylinder(10.0)
    }
}

/// Capability surface the core requires from an agent.
pub trait SearchAgent {
    /// Current world position.
    fn position(&self) -> Point3;

    /// Has the agent arrived at its current target?
    fn is_close_to_target(&self) -> bool;

    /// Command a new target position.
    fn set_target(&mut self, target: Point3);

    /// Sensor footprint (radius + shape).
    fn sensor(&self) -> SensorFootprint;

    /// Sensor footprint radius.
    fn sensor_radius(&self) -> f32 {
        self.sensor().radius
    }

    /// Sensor footprint shape.
    fn sensor_shape(&self) -> SensorShape {
        self.sensor().shape
    }

    /// Is a world point inside this agent's sensor footprint?
    fn is_point_in_sensor_range(&self, point: Point3) -> bool {
        self.sensor().contains(self.position(), point)
    }
}

/// Immutable copy of the agent state read once per tick.
///
/// The coverage evaluator and detection tracker work on snapshots so a
/// tick never observes an agent halfway through an update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentSnapshot {
    /// Agent index
    pub id: AgentId,
    /// Position at capture time
    pub position: Point3,
    /// Sensor footprint at capture time
    pub sensor: SensorFootprint,
}

impl AgentSnapshot {
    /// Capture the current state of an agent.
    pub fn capture<A: SearchAgent + ?Sized>(id: AgentId, agent: &A) -> Self {
        Self {
            id,
            position: agent.position(),
            sensor: agent.sensor(),
        }
    }

    /// Capture every agent in slice order.
    pub fn capture_all<A: SearchAgent>(agents: &[A]) -> Vec<Self> {
        agents
            .iter()
            .enumerate()
            .map(|(i, agent)| Self::capture(AgentId(i), agent))
            .collect()
    }

    /// Is `point` inside the captured footprint?
    #[inline]
    pub fn sees(&self, point: Point3) -> bool {
        self.sensor.contains(self.position, point)
    }
}
