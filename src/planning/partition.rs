//! Search area partitioning.
//!
//! The search area is cut into N equal-width slabs along one ground axis.
//! Each slab keeps the full extent of the other axes and is assigned to the
//! agent with the same index.
//!
//! ```text
//!  min.x                                   max.x
//!    +---------+---------+---------+---------+
//!    |  p[0]   |  p[1]   |  p[2]   |  p[3]   |
//!    |         |         |         |         |
//!    +---------+---------+---------+---------+
//!              ^ shared boundary: p[0].max.x == p[1].min.x
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::Bounds3;
use crate::error::{PlanError, Result};

/// Ground axis along which the search area is sliced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitAxis {
    /// Slabs side by side along X
    #[default]
    X,
    /// Slabs stacked along Z
    Z,
}

impl fmt::Display for SplitAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitAxis::X => write!(f, "x"),
            SplitAxis::Z => write!(f, "z"),
        }
    }
}

impl FromStr for SplitAxis {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(SplitAxis::X),
            "z" => Ok(SplitAxis::Z),
            other => Err(PlanError::invalid(format!("unknown split axis '{other}'"))),
        }
    }
}

/// Split `search` into `n` equal slabs along `axis`.
///
/// Internal boundaries are computed once and shared between neighbours so
/// consecutive partitions meet exactly, and the last partition ends exactly
/// at the search maximum.
pub fn partition(search: &Bounds3, n: usize, axis: SplitAxis) -> Result<Vec<Bounds3>> {
    if n == 0 {
        return Err(PlanError::invalid("partition count must be positive"));
    }
    if !search.is_valid() {
        return Err(PlanError::invalid(format!(
            "search bounds are not valid: {:?}",
            search
        )));
    }

    let (lo, hi) = match axis {
        SplitAxis::X => (search.min.x, search.max.x),
        SplitAxis::Z => (search.min.z, search.max.z),
    };
    let slice = (hi - lo) / n as f32;

    // n + 1 boundaries, the last pinned to the maximum
    let boundaries: Vec<f32> = (0..=n)
        .map(|i| if i == n { hi } else { lo + i as f32 * slice })
        .collect();

    let partitions: Vec<Bounds3> = boundaries
        .windows(2)
        .map(|w| match axis {
            SplitAxis::X => search.with_x_range(w[0], w[1]),
            SplitAxis::Z => search.with_z_range(w[0], w[1]),
        })
        .collect();

    debug!(
        "[Planner] Split {:.1}x{:.1} area into {} partitions along {} (slice {:.2}m)",
        search.width(),
        search.depth(),
        n,
        axis,
        slice
    );

    Ok(partitions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point3;
    use approx::assert_relative_eq;

    fn area() -> Bounds3 {
        Bounds3::from_center_size(Point3::ZERO, Point3::new(100.0, 10.0, 60.0))
    }

    #[test]
    fn test_two_partitions_along_x() {
        let parts = partition(&area(), 2, SplitAxis::X).unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].min.x, -50.0);
        assert_eq!(parts[0].max.x, 0.0);
        assert_eq!(parts[1].min.x, 0.0);
        assert_eq!(parts[1].max.x, 50.0);
        for p in &parts {
            assert_eq!(p.min.z, -30.0);
            assert_eq!(p.max.z, 30.0);
            assert_eq!(p.min.y, -5.0);
        }
    }

    #[test]
    fn test_partitions_tile_exactly() {
        let search = Bounds3::new(Point3::new(-13.7, 0.0, 2.0), Point3::new(91.3, 0.0, 7.0));
        for n in 1..=13 {
            let parts = partition(&search, n, SplitAxis::X).unwrap();
            assert_eq!(parts.first().unwrap().min.x, search.min.x);
            assert_eq!(parts.last().unwrap().max.x, search.max.x);
            for w in parts.windows(2) {
                assert_eq!(w[0].max.x, w[1].min.x);
            }
            let total: f32 = parts.iter().map(|p| p.width()).sum();
            assert_relative_eq!(total, search.width(), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_split_along_z() {
        let parts = partition(&area(), 3, SplitAxis::Z).unwrap();
        assert_eq!(parts[0].min.z, -30.0);
        assert_relative_eq!(parts[0].max.z, -10.0, epsilon = 1e-5);
        assert_eq!(parts[2].max.z, 30.0);
        assert_eq!(parts[1].width(), 100.0);
    }

    #[test]
    fn test_zero_partitions_rejected() {
        assert!(matches!(
            partition(&area(), 0, SplitAxis::X),
            Err(PlanError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_bounds_rejected() {
        let bad = Bounds3 {
            min: Point3::new(f32::NAN, 0.0, 0.0),
            max: Point3::new(1.0, 0.0, 1.0),
        };
        assert!(partition(&bad, 2, SplitAxis::X).is_err());
    }

    #[test]
    fn test_axis_parse() {
        assert_eq!("X".parse::<SplitAxis>().unwrap(), SplitAxis::X);
        assert_eq!(" z ".parse::<SplitAxis>().unwrap(), SplitAxis::Z);
        assert!("y".parse::<SplitAxis>().is_err());
    }
}
