//! Arc-length parameterized sampling.
//!
//! A progress value `t` in [0, 1] maps to the point at `t * total_length`
//! along the polyline, so equal steps in `t` cover equal distance no matter
//! how the waypoints are spaced.
//!
//! ```text
//! waypoints:   P0 -------- P1 ---- P2
//! cumulative:  0.0        10.0    15.0
//! t = 0.5  ->  target 7.5 -> segment 0 at 0.75 -> lerp(P0, P1, 0.75)
//! ```

use crate::core::Point3;

use super::Path;

/// Segment lengths shorter than this interpolate as a single point.
const SEGMENT_EPSILON: f32 = 1e-6;

/// Running sum of segment lengths, parallel to a [`Path`].
///
/// `cumulative[0] == 0`, entries are non-decreasing and the last entry is
/// the total path length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CumulativeLengthTable {
    cumulative: Vec<f32>,
}

impl CumulativeLengthTable {
    /// Build the table for a path.
    pub fn build(path: &Path) -> Self {
        let mut cumulative = Vec::with_capacity(path.len());
        let mut running = 0.0_f32;
        for (i, point) in path.iter().enumerate() {
            if i > 0 {
                running += path.points()[i - 1].distance(point);
            }
            cumulative.push(running);
        }
        Self { cumulative }
    }

    /// Total path length (0 for empty or single point paths).
    #[inline]
    pub fn total(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Raw cumulative distances.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.cumulative
    }

    /// Number of entries (equals the waypoint count).
    #[inline]
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Empty table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }
}

/// Position at normalized progress `t` along `path`.
///
/// `t` is clamped to [0, 1] and NaN counts as 0. An empty path yields
/// [`Point3::ZERO`].
pub fn sample_at(path: &Path, table: &CumulativeLengthTable, t: f32) -> Point3 {
    let points = path.points();
    let Some(&first) = points.first() else {
        return Point3::ZERO;
    };
    let last = points[points.len() - 1];

    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t <= 0.0 || points.len() == 1 {
        return first;
    }
    if t >= 1.0 {
        return last;
    }

    let cumulative = table.as_slice();
    if cumulative.len() != points.len() {
        return last;
    }

    let target = t * table.total();
    let Some(i) = locate_segment(cumulative, target) else {
        return last;
    };

    let seg_len = cumulative[i + 1] - cumulative[i];
    let segment_t = if seg_len < SEGMENT_EPSILON {
        0.0
    } else {
        (target - cumulative[i]) / seg_len
    };

    points[i].lerp(&points[i + 1], segment_t)
}

/// Index `i` of the segment with `cumulative[i] <= target <= cumulative[i + 1]`.
///
/// None only when the table is not non-decreasing or `target` lies outside
/// `[0, total]`.
fn locate_segment(cumulative: &[f32], target: f32) -> Option<usize> {
    // First entry >= target; the segment starts one before it
    let idx = cumulative.partition_point(|&c| c < target);
    let i = idx.saturating_sub(1);
    if i + 1 >= cumulative.len() {
        return None;
    }
    (cumulative[i] <= target && target <= cumulative[i + 1]).then_some(i)
}

/// A path bundled with its cumulative length table.
///
/// Immutable after construction and therefore shareable across threads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledPath {
    path: Path,
    table: CumulativeLengthTable,
}

impl SampledPath {
    /// Build the length table for `path`.
    pub fn new(path: Path) -> Self {
        let table = CumulativeLengthTable::build(&path);
        Self { path, table }
    }

    /// Position at normalized progress `t`.
    #[inline]
    pub fn position_at(&self, t: f32) -> Point3 {
        sample_at(&self.path, &self.table, t)
    }

    /// Position at an absolute distance along the path.
    pub fn position_at_distance(&self, distance: f32) -> Point3 {
        let total = self.table.total();
        if total <= 0.0 {
            return self.position_at(0.0);
        }
        self.position_at(distance / total)
    }

    /// Distance along the path at normalized progress `t`.
    pub fn distance_at(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        t * self.table.total()
    }

    /// Total length.
    #[inline]
    pub fn length(&self) -> f32 {
        self.table.total()
    }

    /// The underlying path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cumulative length table.
    #[inline]
    pub fn table(&self) -> &CumulativeLengthTable {
        &self.table
    }
}

impl From<Path> for SampledPath {
    fn from(path: Path) -> Self {
        Self::new(path)
    }
}
