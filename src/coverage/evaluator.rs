//! Grid coverage evaluation.
//!
//! Every evaluation pass tests each pending cell against the agents'
//! sensor footprints:
//!
//! 1. vertical gap: `|agent.y - cell.y| <= detection_height`
//! 2. footprint: cylinder or cone containment
//! 3. line of sight (optional): a ray from the agent to just above the cell
//!    must not hit anything more than half a cell short of its target
//!
//! The first agent (in `AgentId` order) that passes all three gets the cell.
//! A pass first computes every result read-only and then applies them, so
//! the outcome does not depend on cell iteration order.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::agent::{AgentId, AgentSnapshot, SearchAgent};
use crate::core::{Bounds3, CoverageStatus, Point3};
use crate::error::Result;
use crate::world::{LayerMask, Raycaster};

use super::grid::CoverageGrid;
use super::stats::CoverageStats;

/// Runtime coverage settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoverageSettings {
    /// Cell size (meters)
    pub resolution: f32,
    /// Max vertical distance between agent and cell
    pub detection_height: f32,
    /// Line-of-sight check per cell (the occlusion precheck always runs)
    pub occlusion_detection: bool,
    /// Line-of-sight ray aims this far above the cell center
    pub los_offset: f32,
    /// Seconds between passes driven by [`CoverageEvaluator::update`]
    pub evaluation_interval: f32,
    /// Largest grid that may be built
    pub max_cells: usize,
}

impl Default for CoverageSettings {
    fn default() -> Self {
        Self {
            resolution: 2.0,
            detection_height: 50.0,
            occlusion_detection: true,
            los_offset: 0.1,
            evaluation_interval: 0.5,
            max_cells: 4_000_000,
        }
    }
}

/// Tracks which ground cells the swarm has seen.
#[derive(Clone, Debug)]
pub struct CoverageEvaluator {
    grid: CoverageGrid,
    settings: CoverageSettings,
    /// Cells observed per agent, indexed by AgentId
    contributions: Vec<usize>,
    accumulator: f32,
    evaluations: u64,
    full_coverage_logged: bool,
}

impl CoverageEvaluator {
    /// Build the grid over `bounds` and run the occlusion precheck.
    ///
    /// A cell is Occluded when a ray cast straight down from
    /// `detection_height` above its center hits the OBSTACLE layer.
    pub fn build(
        bounds: &Bounds3,
        settings: CoverageSettings,
        raycaster: &dyn Raycaster,
    ) -> Result<Self> {
        let mut grid = CoverageGrid::new(bounds, settings.resolution, settings.max_cells)?;

        let lift = Point3::new(0.0, settings.detection_height, 0.0);
        for index in 0..grid.cell_count() {
            let origin = grid.center_at_index(index) + lift;
            let hit = raycaster.raycast(
                origin,
                Point3::DOWN,
                settings.detection_height,
                LayerMask::OBSTACLE,
            );
            if hit.is_some() {
                grid.mark_occluded(index);
            }
        }

        info!(
            "[Coverage] Grid {}x{} at {:.2}m: {} cells, {} occluded",
            grid.width(),
            grid.depth(),
            settings.resolution,
            grid.cell_count(),
            grid.occluded_count()
        );

        Ok(Self {
            grid,
            settings,
            contributions: Vec::new(),
            accumulator: 0.0,
            evaluations: 0,
            full_coverage_logged: false,
        })
    }

    /// Advance the interval timer and run a pass when it elapses.
    ///
    /// At most one pass runs per call; a backlog longer than one interval is
    /// dropped. Returns true if a pass ran.
    pub fn update(
        &mut self,
        dt: f32,
        agents: &[AgentSnapshot],
        raycaster: &dyn Raycaster,
    ) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }
        let interval = self.settings.evaluation_interval.max(0.0);
        if self.accumulator < interval {
            return false;
        }
        self.accumulator -= interval;
        if self.accumulator >= interval {
            self.accumulator = 0.0;
        }
        self.evaluate(agents, raycaster);
        true
    }

    /// Run one evaluation pass now. Returns the number of newly observed cells.
    pub fn evaluate(&mut self, agents: &[AgentSnapshot], raycaster: &dyn Raycaster) -> usize {
        let mut ordered: Vec<&AgentSnapshot> = agents.iter().collect();
        ordered.sort_by_key(|a| a.id);

        // Phase 1: read-only
        let hits: Vec<(usize, AgentId)> = self
            .grid
            .indices_with(CoverageStatus::Unmapped)
            .filter_map(|index| {
                let cell = self.grid.center_at_index(index);
                ordered
                    .iter()
                    .find(|agent| self.agent_sees_cell(agent, cell, raycaster))
                    .map(|agent| (index, agent.id))
            })
            .collect();

        // Phase 2: apply
        let mut newly = 0;
        for (index, agent) in hits {
            if self.grid.mark_observed(index, agent) {
                if self.contributions.len() <= agent.index() {
                    self.contributions.resize(agent.index() + 1, 0);
                }
                self.contributions[agent.index()] += 1;
                newly += 1;
            }
        }
        self.evaluations += 1;

        if newly > 0 {
            debug!(
                "[Coverage] Pass {}: +{} cells, {:.1}% effective",
                self.evaluations,
                newly,
                self.effective_coverage_percentage()
            );
        }
        if !self.full_coverage_logged && self.is_fully_covered() {
            self.full_coverage_logged = true;
            info!(
                "[Coverage] Full coverage after {} passes ({})",
                self.evaluations,
                self.stats()
            );
        }

        newly
    }

    /// Capture snapshots from live agents and evaluate.
    pub fn evaluate_agents<A: SearchAgent>(
        &mut self,
        agents: &[A],
        raycaster: &dyn Raycaster,
    ) -> usize {
        let snapshots = AgentSnapshot::capture_all(agents);
        self.evaluate(&snapshots, raycaster)
    }

    fn agent_sees_cell(&self, agent: &AgentSnapshot, cell: Point3, raycaster: &dyn Raycaster) -> bool {
        if (agent.position.y - cell.y).abs() > self.settings.detection_height {
            return false;
        }
        if !agent.sees(cell) {
            return false;
        }
        if self.settings.occlusion_detection {
            return self.has_line_of_sight(agent.position, cell, raycaster);
        }
        true
    }

    fn has_line_of_sight(&self, from: Point3, cell: Point3, raycaster: &dyn Raycaster) -> bool {
        let target = cell + Point3::new(0.0, self.settings.los_offset, 0.0);
        let dir = target - from;
        let distance = dir.length();
        if distance <= f32::EPSILON {
            return true;
        }
        let layers = LayerMask::OBSTACLE.union(LayerMask::GROUND);
        match raycaster.raycast(from, dir, distance, layers) {
            Some(hit) => hit.distance >= distance - self.settings.resolution * 0.5,
            None => true,
        }
    }

    /// Return every Observed cell to Unmapped and zero the counters.
    ///
    /// Occluded cells keep their state.
    pub fn reset(&mut self) {
        self.grid.clear_observed();
        self.contributions.iter_mut().for_each(|c| *c = 0);
        self.accumulator = 0.0;
        self.evaluations = 0;
        self.full_coverage_logged = false;
        info!("[Coverage] Reset ({} occluded cells kept)", self.grid.occluded_count());
    }

    /// Metrics snapshot
    pub fn stats(&self) -> CoverageStats {
        CoverageStats {
            total_cells: self.grid.cell_count(),
            observed_cells: self.grid.observed_count(),
            occluded_cells: self.grid.occluded_count(),
            evaluations: self.evaluations,
        }
    }

    /// observed / total, in [0, 1]
    pub fn coverage_fraction(&self) -> f32 {
        self.stats().coverage_fraction()
    }

    /// observed / (total - occluded), in [0, 1]
    pub fn effective_coverage_fraction(&self) -> f32 {
        self.stats().effective_fraction()
    }

    /// Raw coverage percent
    pub fn coverage_percentage(&self) -> f32 {
        self.stats().coverage_percentage()
    }

    /// Coverage percent of observable cells
    pub fn effective_coverage_percentage(&self) -> f32 {
        self.stats().effective_percentage()
    }

    /// Every observable cell has been observed
    pub fn is_fully_covered(&self) -> bool {
        self.stats().is_fully_covered()
    }

    /// World centers of cells still Unmapped
    pub fn uncovered_cells(&self) -> Vec<Point3> {
        self.grid
            .indices_with(CoverageStatus::Unmapped)
            .map(|i| self.grid.center_at_index(i))
            .collect()
    }

    /// Status of the cell containing `point` (None outside the grid)
    pub fn status_at(&self, point: Point3) -> Option<CoverageStatus> {
        self.grid.get(self.grid.world_to_grid(point))
    }

    /// Cells first observed by `agent` (0 for unknown agents)
    pub fn contribution(&self, agent: AgentId) -> usize {
        self.contributions.get(agent.index()).copied().unwrap_or(0)
    }

    /// Per-agent observed cell counts, indexed by AgentId
    pub fn contributions(&self) -> &[usize] {
        &self.contributions
    }

    /// Underlying grid
    pub fn grid(&self) -> &CoverageGrid {
        &self.grid
    }

    /// Active settings
    pub fn settings(&self) -> &CoverageSettings {
        &self.settings
    }
}
