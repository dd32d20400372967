//! Probabilistic target detection.
//!
//! Each time an agent passes over a target there is a chance of spotting
//! it. The chance falls off linearly with horizontal distance and drops to
//! zero when line of sight is required and blocked:
//!
//! ```text
//! p = base * (1 - d / range)    for d < range, else 0
//! P = 1 - (1 - p1)(1 - p2)...   cumulative over samples
//! ```
//!
//! Probabilities accumulate either online (one fold per tick from live
//! agent positions) or offline by sampling each agent's path at evenly
//! spaced progress values.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::Point3;
use crate::path::SampledPath;
use crate::world::{LayerMask, Raycaster};

/// Height above the target the line-of-sight ray aims at.
const TARGET_SIGHT_OFFSET: f32 = 0.1;

/// Single-sample detection model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionModel {
    /// Probability directly under the sensor
    pub base_probability: f32,
    /// Horizontal range beyond which nothing is detected
    pub range: f32,
    /// Blocked line of sight means no detection
    pub require_line_of_sight: bool,
}

impl Default for DetectionModel {
    fn default() -> Self {
        Self {
            base_probability: 0.8,
            range: 10.0,
            require_line_of_sight: true,
        }
    }
}

impl DetectionModel {
    /// Probability that a sensor at `sensor` detects `target` in one sample.
    pub fn probability(&self, sensor: Point3, target: Point3, raycaster: &dyn Raycaster) -> f32 {
        let d = sensor.horizontal_distance(&target);
        if !(self.range > 0.0) || d >= self.range {
            return 0.0;
        }
        if self.require_line_of_sight && !line_of_sight(sensor, target, raycaster) {
            return 0.0;
        }
        (self.base_probability * (1.0 - d / self.range)).clamp(0.0, 1.0)
    }
}

fn line_of_sight(from: Point3, target: Point3, raycaster: &dyn Raycaster) -> bool {
    let aim = target + Point3::new(0.0, TARGET_SIGHT_OFFSET, 0.0);
    let dir = aim - from;
    let distance = dir.length();
    if distance <= f32::EPSILON {
        return true;
    }
    raycaster
        .raycast(from, dir, distance, LayerMask::OBSTACLE)
        .is_none()
}

/// One tracked target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackedTarget {
    /// Ground position
    pub position: Point3,
    /// Probability the target has been detected so far
    pub probability: f32,
    /// Samples that had a non-zero chance
    pub sightings: usize,
}

/// Cumulative detection probability per target.
#[derive(Clone, Debug, Default)]
pub struct DetectionTracker {
    model: DetectionModel,
    targets: Vec<TrackedTarget>,
    samples: u64,
}

impl DetectionTracker {
    /// Track `targets` under `model`.
    pub fn new(model: DetectionModel, targets: impl IntoIterator<Item = Point3>) -> Self {
        Self {
            model,
            targets: targets
                .into_iter()
                .map(|position| TrackedTarget {
                    position,
                    probability: 0.0,
                    sightings: 0,
                })
                .collect(),
            samples: 0,
        }
    }

    /// Fold one sample of agent positions into every target.
    pub fn accumulate(&mut self, agent_positions: &[Point3], raycaster: &dyn Raycaster) {
        for target in &mut self.targets {
            for &sensor in agent_positions {
                let p = self.model.probability(sensor, target.position, raycaster);
                if p > 0.0 {
                    target.probability = 1.0 - (1.0 - target.probability) * (1.0 - p);
                    target.sightings += 1;
                }
            }
        }
        self.samples += 1;
    }

    /// Accumulate `samples` evenly spaced positions along each path.
    ///
    /// Sample k of n is taken at `t = k / (n - 1)` so both path ends are
    /// included; a single sample uses the path start.
    pub fn sample_paths<'a>(
        &mut self,
        paths: impl IntoIterator<Item = &'a SampledPath>,
        samples: usize,
        raycaster: &dyn Raycaster,
    ) {
        let paths: Vec<&SampledPath> = paths.into_iter().collect();
        if samples == 0 || paths.is_empty() {
            return;
        }
        let denom = samples.saturating_sub(1).max(1) as f32;
        let mut positions = Vec::with_capacity(paths.len());
        for k in 0..samples {
            let t = k as f32 / denom;
            positions.clear();
            positions.extend(paths.iter().map(|p| p.position_at(t)));
            self.accumulate(&positions, raycaster);
        }
        debug!(
            "[Detection] Sampled {} paths x {} points, mean P = {:.3}",
            paths.len(),
            samples,
            self.mean_probability()
        );
    }

    /// Draw a detected / missed outcome per target.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
        let outcomes: Vec<bool> = self
            .targets
            .iter()
            .map(|t| rng.random::<f32>() < t.probability)
            .collect();
        info!(
            "[Detection] Rolled {}/{} targets detected",
            outcomes.iter().filter(|d| **d).count(),
            outcomes.len()
        );
        outcomes
    }

    /// Tracked targets
    pub fn targets(&self) -> &[TrackedTarget] {
        &self.targets
    }

    /// Cumulative probability per target
    pub fn probabilities(&self) -> Vec<f32> {
        self.targets.iter().map(|t| t.probability).collect()
    }

    /// Mean cumulative probability (0 with no targets)
    pub fn mean_probability(&self) -> f32 {
        if self.targets.is_empty() {
            return 0.0;
        }
        self.targets.iter().map(|t| t.probability).sum::<f32>() / self.targets.len() as f32
    }

    /// Samples folded so far
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Detection model
    pub fn model(&self) -> &DetectionModel {
        &self.model
    }

    /// Zero every probability.
    pub fn reset(&mut self) {
        for t in &mut self.targets {
            t.probability = 0.0;
            t.sightings = 0;
        }
        self.samples = 0;
    }
}
