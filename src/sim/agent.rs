//! Kinematic point agent.

use crate::agent::{SearchAgent, SensorFootprint};
use crate::core::Point3;

/// Moves straight at its target at constant speed. No dynamics.
#[derive(Clone, Debug)]
pub struct SimulatedAgent {
    position: Point3,
    target: Option<Point3>,
    speed: f32,
    arrival_tolerance: f32,
    sensor: SensorFootprint,
    distance_flown: f32,
}

impl SimulatedAgent {
    /// Create an agent at `position`.
    pub fn new(position: Point3, speed: f32, arrival_tolerance: f32, sensor: SensorFootprint) -> Self {
        Self {
            position,
            target: None,
            speed,
            arrival_tolerance,
            sensor,
            distance_flown: 0.0,
        }
    }

    /// Move toward the target for `dt` seconds without overshooting.
    pub fn advance(&mut self, dt: f32) {
        let Some(target) = self.target else {
            return;
        };
        let offset = target - self.position;
        let remaining = offset.length();
        if remaining <= f32::EPSILON || !(dt > 0.0) {
            return;
        }
        let travel = (self.speed * dt).min(remaining);
        self.position = self.position + offset * (travel / remaining);
        self.distance_flown += travel;
    }

    /// Current target
    pub fn target(&self) -> Option<Point3> {
        self.target
    }

    /// Total distance moved
    pub fn distance_flown(&self) -> f32 {
        self.distance_flown
    }

    /// Cruise speed (m/s)
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl SearchAgent for SimulatedAgent {
    fn position(&self) -> Point3 {
        self.position
    }

    fn is_close_to_target(&self) -> bool {
        self.target
            .is_some_and(|t| t.distance(&self.position) <= self.arrival_tolerance)
    }

    fn set_target(&mut self, target: Point3) {
        self.target = Some(target);
    }

    fn sensor(&self) -> SensorFootprint {
        self.sensor
    }
}
