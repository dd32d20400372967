//! Coverage metrics snapshot.

use serde::{Deserialize, Serialize};

/// Point-in-time coverage numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageStats {
    /// All grid cells
    pub total_cells: usize,
    /// Cells seen at least once
    pub observed_cells: usize,
    /// Cells under static obstacles
    pub occluded_cells: usize,
    /// Evaluation passes run since the last reset
    pub evaluations: u64,
}

impl CoverageStats {
    /// Cells that can still be observed in principle.
    pub fn observable_cells(&self) -> usize {
        self.total_cells.saturating_sub(self.occluded_cells)
    }

    /// Cells still Unmapped.
    pub fn remaining_cells(&self) -> usize {
        self.observable_cells().saturating_sub(self.observed_cells)
    }

    /// observed / total, in [0, 1].
    pub fn coverage_fraction(&self) -> f32 {
        self.observed_cells as f32 / self.total_cells.max(1) as f32
    }

    /// observed / (total - occluded), in [0, 1].
    pub fn effective_fraction(&self) -> f32 {
        self.observed_cells as f32 / self.observable_cells().max(1) as f32
    }

    /// Raw coverage in percent.
    pub fn coverage_percentage(&self) -> f32 {
        self.coverage_fraction() * 100.0
    }

    /// Coverage of observable cells in percent.
    pub fn effective_percentage(&self) -> f32 {
        self.effective_fraction() * 100.0
    }

    /// Every observable cell has been seen.
    pub fn is_fully_covered(&self) -> bool {
        self.observed_cells >= self.observable_cells()
    }
}

impl std::fmt::Display for CoverageStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} cells observed ({:.1}%), {} occluded, effective {:.1}%",
            self.observed_cells,
            self.total_cells,
            self.coverage_percentage(),
            self.occluded_cells,
            self.effective_percentage()
        )
    }
}
