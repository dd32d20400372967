//! Start-point rotation.

use crate::core::Point3;

use super::Path;

/// Rotate `path` so it begins at the waypoint nearest `start`.
///
/// The nearest waypoint is found by squared distance with a strict
/// comparison, so the first of several equally near points wins. The result
/// is a rotation of the input: `path[k..] ++ path[..k]`.
pub fn optimize(path: &Path, start: Point3) -> Path {
    let points = path.points();
    if points.is_empty() {
        return Path::new();
    }

    let mut nearest = 0;
    let mut best = f32::INFINITY;
    for (i, point) in points.iter().enumerate() {
        let d = point.distance_squared(&start);
        if d < best {
            best = d;
            nearest = i;
        }
    }

    if nearest == 0 {
        return path.clone();
    }

    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[nearest..]);
    rotated.extend_from_slice(&points[..nearest]);
    Path::from_points(rotated)
}
