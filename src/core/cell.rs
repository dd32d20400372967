//! Coverage cell state.

use serde::{Deserialize, Serialize};

/// Observation state of one coverage cell.
///
/// Transitions are one-way:
/// - `Unmapped` -> `Observed` when an agent's sensor sees the cell
/// - `Occluded` is fixed at grid build time and never changes
///
/// Only an explicit coverage reset moves `Observed` back to `Unmapped`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CoverageStatus {
    /// Not yet seen by any agent
    #[default]
    Unmapped = 0,

    /// Seen at least once
    Observed = 1,

    /// Permanently blocked from view by static geometry
    Occluded = 2,
}

impl CoverageStatus {
    /// Can this cell still become Observed?
    #[inline]
    pub fn is_pending(self) -> bool {
        self == CoverageStatus::Unmapped
    }

    /// Does this cell count towards the observable area?
    #[inline]
    pub fn is_observable(self) -> bool {
        self != CoverageStatus::Occluded
    }

    /// Convert from u8 (unknown values map to Unmapped)
    #[inline]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => CoverageStatus::Observed,
            2 => CoverageStatus::Occluded,
            _ => CoverageStatus::Unmapped,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CoverageStatus::Unmapped => '.',
            CoverageStatus::Observed => 'o',
            CoverageStatus::Occluded => '#',
        }
    }
}
