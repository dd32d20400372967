//! Point and coordinate types.
//!
//! World space follows the simulation convention: X and Z span the ground
//! plane, Y is altitude (up).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Grid coordinates (integer cell indices on the ground plane)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column index (along world X)
    pub x: i32,
    /// Row index (along world Z)
    pub z: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.z - other.z).abs()
    }
}

/// World-space point or vector (meters, f32)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    /// X coordinate (ground plane)
    pub x: f32,
    /// Y coordinate (altitude)
    pub y: f32,
    /// Z coordinate (ground plane)
    pub z: f32,
}

impl Point3 {
    /// Origin
    pub const ZERO: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Unit vector pointing up (+Y)
    pub const UP: Point3 = Point3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// Unit vector pointing down (-Y)
    pub const DOWN: Point3 = Point3 {
        x: 0.0,
        y: -1.0,
        z: 0.0,
    };

    /// Create a new point
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Point on the ground plane at the given altitude
    #[inline]
    pub const fn at_altitude(x: f32, z: f32, altitude: f32) -> Self {
        Self { x, y: altitude, z }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &Point3) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(&self, other: &Point3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Distance projected onto the ground (XZ) plane
    #[inline]
    pub fn horizontal_distance(&self, other: &Point3) -> f32 {
        let dx = self.x - other.x;
        let dz = self.z - other.z;
        (dx * dx + dz * dz).sqrt()
    }

    /// Length as a vector from the origin
    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Normalize to unit length (zero vector stays zero)
    #[inline]
    pub fn normalize(&self) -> Point3 {
        let len = self.length();
        if len > 0.0 { *self * (1.0 / len) } else { *self }
    }

    /// Dot product
    #[inline]
    pub fn dot(&self, other: &Point3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Angle between two vectors in radians (0 if either is zero-length)
    pub fn angle_between(&self, other: &Point3) -> f32 {
        let denom = self.length() * other.length();
        if denom <= f32::EPSILON {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }

    /// Linear interpolation: `self` at t=0, `other` at t=1
    #[inline]
    pub fn lerp(&self, other: &Point3, t: f32) -> Point3 {
        Point3::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    /// Componentwise minimum
    #[inline]
    pub fn min(&self, other: &Point3) -> Point3 {
        Point3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Componentwise maximum
    #[inline]
    pub fn max(&self, other: &Point3) -> Point3 {
        Point3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// All components finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Point3 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Point3 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f32> for Point3 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Point3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for Point3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point3::new(-self.x, -self.y, -self.z)
    }
}
