//! Default value functions for serde deserialization.

use crate::core::Point3;

pub fn area_size() -> Point3 {
    Point3::new(100.0, 0.0, 100.0)
}

pub fn overlap() -> f32 {
    0.2
}

pub fn density() -> f32 {
    1.0
}

pub fn altitude() -> f32 {
    30.0
}

pub fn max_waypoints() -> usize {
    crate::planning::DEFAULT_MAX_WAYPOINTS
}

pub fn resolution() -> f32 {
    2.0
}

pub fn detection_height() -> f32 {
    50.0
}

pub fn enabled() -> bool {
    true
}

pub fn los_offset() -> f32 {
    0.1
}

pub fn evaluation_interval() -> f32 {
    0.5
}

pub fn max_cells() -> usize {
    4_000_000
}

pub fn agent_count() -> usize {
    2
}

pub fn speed() -> f32 {
    10.0
}

pub fn arrival_tolerance() -> f32 {
    1.0
}

pub fn base_probability() -> f32 {
    0.8
}

pub fn detection_range() -> f32 {
    10.0
}

pub fn detection_samples() -> usize {
    64
}

pub fn seed() -> u64 {
    7
}

pub fn dt() -> f32 {
    0.1
}

pub fn max_ticks() -> u64 {
    20_000
}
