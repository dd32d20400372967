//! Ordered waypoint polyline.

use serde::{Deserialize, Serialize};

use crate::core::{Point3, Waypoint};

/// Waypoints in flight order.
///
/// Immutable once generated; the only transformation applied afterwards is
/// the start rotation done by [`crate::path::optimize`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    points: Vec<Waypoint>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a path from waypoints.
    pub fn from_points(points: Vec<Waypoint>) -> Self {
        Self { points }
    }

    /// Waypoints in order.
    #[inline]
    pub fn points(&self) -> &[Waypoint] {
        &self.points
    }

    /// Consume and return the waypoint vector.
    pub fn into_points(self) -> Vec<Waypoint> {
        self.points
    }

    /// Number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// No waypoints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First waypoint.
    pub fn first(&self) -> Option<Point3> {
        self.points.first().copied()
    }

    /// Last waypoint.
    pub fn last(&self) -> Option<Point3> {
        self.points.last().copied()
    }

    /// Waypoint iterator.
    pub fn iter(&self) -> std::slice::Iter<'_, Waypoint> {
        self.points.iter()
    }

    /// Consecutive waypoint pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point3, Point3)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Total length: sum of consecutive Euclidean distances.
    pub fn length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(&b)).sum()
    }

    pub(crate) fn push(&mut self, point: Waypoint) {
        self.points.push(point);
    }
}

impl From<Vec<Waypoint>> for Path {
    fn from(points: Vec<Waypoint>) -> Self {
        Self::from_points(points)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Waypoint;
    type IntoIter = std::slice::Iter<'a, Waypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_path_length() {
        let path = Path::from_points(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 4.0),
            Point3::new(3.0, 0.0, 10.0),
        ]);
        assert_relative_eq!(path.length(), 11.0, epsilon = 1e-5);
        assert_eq!(path.segments().count(), 2);
    }

    #[test]
    fn test_degenerate_paths() {
        assert_eq!(Path::new().length(), 0.0);
        assert!(Path::new().first().is_none());
        let single = Path::from_points(vec![Point3::new(1.0, 2.0, 3.0)]);
        assert_eq!(single.length(), 0.0);
        assert_eq!(single.first(), single.last());
    }
}
