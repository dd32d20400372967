//! Coverage grid storage.
//!
//! Structure-of-Arrays layout over the ground plane of the search area:
//!
//! ```text
//! statuses:    [U U O U U U ...]   CoverageStatus as u8
//! observed_by: [- - - 0 1 - ...]   first observing agent (NO_AGENT if none)
//! ```
//!
//! Cell (x, z) covers `[origin.x + x*res, origin.x + (x+1)*res)` along X and
//! the same along Z; `index = z * width + x`.

use crate::agent::AgentId;
use crate::core::{Bounds3, CoverageStatus, GridCoord, Point3};
use crate::error::{PlanError, Result};

/// Sentinel in `observed_by` for cells nobody has seen.
const NO_AGENT: u32 = u32::MAX;

/// Grid storage using Structure-of-Arrays (SoA) layout.
#[derive(Clone, Debug)]
pub struct CoverageGrid {
    /// CoverageStatus per cell
    statuses: Vec<u8>,
    /// First observer per cell
    observed_by: Vec<u32>,

    /// Grid width in cells (along X)
    width: usize,
    /// Grid depth in cells (along Z)
    depth: usize,
    /// Resolution in meters per cell
    resolution: f32,
    /// World position of the (0, 0) cell's min corner
    origin: Point3,

    observed: usize,
    occluded: usize,
}

impl CoverageGrid {
    /// Lay a grid over the ground footprint of `bounds`.
    ///
    /// `width = ceil(size_x / res)`, `depth = ceil(size_z / res)`.
    pub fn new(bounds: &Bounds3, resolution: f32, max_cells: usize) -> Result<Self> {
        if !(resolution > 0.0) || !resolution.is_finite() {
            return Err(PlanError::invalid(format!(
                "grid resolution must be positive, got {resolution}"
            )));
        }
        if !bounds.is_valid() {
            return Err(PlanError::invalid(format!(
                "grid bounds are not valid: {:?}",
                bounds
            )));
        }

        let width = (bounds.width() / resolution).ceil() as usize;
        let depth = (bounds.depth() / resolution).ceil() as usize;
        let size = width.checked_mul(depth).unwrap_or(usize::MAX);
        if size > max_cells {
            return Err(PlanError::invalid(format!(
                "grid of {width}x{depth} cells exceeds the {max_cells} cell limit"
            )));
        }

        Ok(Self {
            statuses: vec![CoverageStatus::Unmapped as u8; size],
            observed_by: vec![NO_AGENT; size],
            width,
            depth,
            resolution,
            origin: bounds.min,
            observed: 0,
            occluded: 0,
        })
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid depth in cells
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Resolution in meters per cell
    #[inline]
    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    /// Min corner of cell (0, 0)
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.statuses.len()
    }

    /// Cells currently Observed
    #[inline]
    pub fn observed_count(&self) -> usize {
        self.observed
    }

    /// Cells marked Occluded
    #[inline]
    pub fn occluded_count(&self) -> usize {
        self.occluded
    }

    /// Raw status bytes
    #[inline]
    pub fn statuses_raw(&self) -> &[u8] {
        &self.statuses
    }

    /// Convert world coordinates to grid coordinates
    #[inline]
    pub fn world_to_grid(&self, point: Point3) -> GridCoord {
        let x = ((point.x - self.origin.x) / self.resolution).floor() as i32;
        let z = ((point.z - self.origin.z) / self.resolution).floor() as i32;
        GridCoord::new(x, z)
    }

    /// Cell center in world coordinates
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> Point3 {
        Point3::new(
            self.origin.x + (coord.x as f32 + 0.5) * self.resolution,
            self.origin.y,
            self.origin.z + (coord.z as f32 + 0.5) * self.resolution,
        )
    }

    /// Check if grid coordinates are within bounds
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.z >= 0
            && (coord.x as usize) < self.width
            && (coord.z as usize) < self.depth
    }

    /// Convert grid coordinates to flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.z as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert flat array index to grid coordinates
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Cell center for a flat index
    #[inline]
    pub fn center_at_index(&self, index: usize) -> Point3 {
        self.grid_to_world(self.index_to_coord(index))
    }

    /// Status at grid coordinates
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<CoverageStatus> {
        self.coord_to_index(coord)
            .map(|i| CoverageStatus::from_u8(self.statuses[i]))
    }

    /// Status at a flat index
    #[inline]
    pub fn status_at_index(&self, index: usize) -> CoverageStatus {
        CoverageStatus::from_u8(self.statuses[index])
    }

    /// Agent that first observed the cell at `index`
    pub fn observer_at_index(&self, index: usize) -> Option<AgentId> {
        match self.observed_by.get(index) {
            Some(&NO_AGENT) | None => None,
            Some(&id) => Some(AgentId(id as usize)),
        }
    }

    /// Mark a cell Occluded. Only Unmapped cells change.
    pub fn mark_occluded(&mut self, index: usize) -> bool {
        if self.status_at_index(index) != CoverageStatus::Unmapped {
            return false;
        }
        self.statuses[index] = CoverageStatus::Occluded as u8;
        self.occluded += 1;
        true
    }

    /// Mark a cell Observed by `agent`. Only Unmapped cells change.
    pub fn mark_observed(&mut self, index: usize, agent: AgentId) -> bool {
        if self.status_at_index(index) != CoverageStatus::Unmapped {
            return false;
        }
        self.statuses[index] = CoverageStatus::Observed as u8;
        self.observed_by[index] = agent.index() as u32;
        self.observed += 1;
        true
    }

    /// Return every Observed cell to Unmapped. Occluded cells are untouched.
    pub fn clear_observed(&mut self) {
        for (status, observer) in self.statuses.iter_mut().zip(self.observed_by.iter_mut()) {
            if *status == CoverageStatus::Observed as u8 {
                *status = CoverageStatus::Unmapped as u8;
            }
            *observer = NO_AGENT;
        }
        self.observed = 0;
    }

    /// Indices of cells with the given status
    pub fn indices_with(&self, status: CoverageStatus) -> impl Iterator<Item = usize> + '_ {
        let raw = status as u8;
        self.statuses
            .iter()
            .enumerate()
            .filter(move |(_, s)| **s == raw)
            .map(|(i, _)| i)
    }

    /// Render as text rows (z descending), one char per cell
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.depth);
        for z in (0..self.depth).rev() {
            for x in 0..self.width {
                let status = self.statuses[z * self.width + x];
                out.push(CoverageStatus::from_u8(status).as_char());
            }
            out.push('\n');
        }
        out
    }
}
