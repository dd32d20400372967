//! Test utilities for Drishti integration tests.
//!
//! Helpers for building areas, random paths and fixed-position agents.

#![allow(dead_code)]

use drishti::{Bounds3, Path, Point3, SearchAgent, SensorFootprint};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Seeded RNG so failures reproduce.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Square area of side `size` centred on the origin, flat in Y.
pub fn square_area(size: f32) -> Bounds3 {
    Bounds3::from_center_size(Point3::ZERO, Point3::new(size, 0.0, size))
}

/// Random valid area with a non-trivial ground footprint.
pub fn random_area(rng: &mut StdRng) -> Bounds3 {
    let min = Point3::new(
        rng.random_range(-500.0..500.0),
        0.0,
        rng.random_range(-500.0..500.0),
    );
    let size = Point3::new(
        rng.random_range(1.0..400.0),
        rng.random_range(0.0..50.0),
        rng.random_range(1.0..400.0),
    );
    Bounds3::new(min, min + size)
}

/// Random polyline with `n` points, some of them repeated.
pub fn random_path(rng: &mut StdRng, n: usize) -> Path {
    let mut points: Vec<Point3> = Vec::with_capacity(n);
    for _ in 0..n {
        if !points.is_empty() && rng.random_bool(0.1) {
            let last = points[points.len() - 1];
            points.push(last);
            continue;
        }
        points.push(Point3::new(
            rng.random_range(-100.0..100.0),
            rng.random_range(0.0..50.0),
            rng.random_range(-100.0..100.0),
        ));
    }
    Path::from_points(points)
}

/// Agent parked at a fixed position.
#[derive(Clone, Debug)]
pub struct StaticAgent {
    pub position: Point3,
    pub sensor: SensorFootprint,
    pub targets: Vec<Point3>,
}

impl StaticAgent {
    pub fn new(position: Point3, sensor: SensorFootprint) -> Self {
        Self {
            position,
            sensor,
            targets: Vec::new(),
        }
    }
}

impl SearchAgent for StaticAgent {
    fn position(&self) -> Point3 {
        self.position
    }

    fn is_close_to_target(&self) -> bool {
        self.targets
            .last()
            .is_some_and(|t| t.distance(&self.position) < 1e-3)
    }

    fn set_target(&mut self, target: Point3) {
        self.targets.push(target);
    }

    fn sensor(&self) -> SensorFootprint {
        self.sensor
    }
}
