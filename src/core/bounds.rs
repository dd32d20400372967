//! Axis-aligned bounding box for search areas and partitions.
//!
//! [`Bounds3`] describes a box in world space. The search area and every
//! per-agent partition are `Bounds3` values; only the X/Z extent matters for
//! sweep generation and grid layout, Y carries the vertical span.
//!
//! # Usage
//!
//! ```rust
//! use drishti::core::{Bounds3, Point3};
//!
//! // 100 x 100 m search area centred on the origin
//! let area = Bounds3::from_center_size(Point3::ZERO, Point3::new(100.0, 20.0, 100.0));
//!
//! assert_eq!(area.width(), 100.0);
//! assert_eq!(area.depth(), 100.0);
//! assert!(area.contains_xz(Point3::new(10.0, 500.0, -10.0)));
//! ```

use serde::{Deserialize, Serialize};

use super::point::Point3;

/// Axis-aligned box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    /// Minimum corner (smallest x, y and z).
    pub min: Point3,
    /// Maximum corner (largest x, y and z).
    pub max: Point3,
}

impl Bounds3 {
    /// Create bounds from two opposite corners.
    ///
    /// The corners are reordered componentwise so `min <= max` always holds.
    #[inline]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self {
            min: a.min(&b),
            max: a.max(&b),
        }
    }

    /// Create bounds from a center point and a full size.
    #[inline]
    pub fn from_center_size(center: Point3, size: Point3) -> Self {
        let half = Point3::new(size.x.abs(), size.y.abs(), size.z.abs()) * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Extent along X.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Extent along Z.
    #[inline]
    pub fn depth(&self) -> f32 {
        self.max.z - self.min.z
    }

    /// Full size as a vector.
    #[inline]
    pub fn size(&self) -> Point3 {
        self.max - self.min
    }

    /// Center of the box.
    #[inline]
    pub fn center(&self) -> Point3 {
        (self.min + self.max) * 0.5
    }

    /// Finite corners with `min <= max` on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
            && self.min.z <= self.max.z
    }

    /// True when the ground footprint has no area (zero width or depth).
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.width() <= 0.0 || self.depth() <= 0.0
    }

    /// Check if a point is inside the box.
    #[inline]
    pub fn contains(&self, point: Point3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Check if a point lies over the ground footprint (Y ignored).
    #[inline]
    pub fn contains_xz(&self, point: Point3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.z >= self.min.z && point.z <= self.max.z
    }

    /// Copy of this box with the X range replaced.
    #[inline]
    pub fn with_x_range(&self, min_x: f32, max_x: f32) -> Self {
        Self {
            min: Point3::new(min_x, self.min.y, self.min.z),
            max: Point3::new(max_x, self.max.y, self.max.z),
        }
    }

    /// Copy of this box with the Z range replaced.
    #[inline]
    pub fn with_z_range(&self, min_z: f32, max_z: f32) -> Self {
        Self {
            min: Point3::new(self.min.x, self.min.y, min_z),
            max: Point3::new(self.max.x, self.max.y, max_z),
        }
    }

    /// Expand by a margin on all sides.
    #[inline]
    pub fn expand(&self, margin: f32) -> Self {
        let m = Point3::new(margin, margin, margin);
        Self {
            min: self.min - m,
            max: self.max + m,
        }
    }

    /// Clamp a point into the box.
    #[inline]
    pub fn clamp(&self, point: Point3) -> Point3 {
        point.max(&self.min).min(&self.max)
    }
}
