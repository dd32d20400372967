//! Search session: mission driver, coverage evaluator and detection tracker
//! behind one tick entry point.
//!
//! ```text
//!            step(dt, agents)
//!                  |
//!      +-----------+-------------------------+
//!      v                                     v
//!  MissionDriver::step              AgentSnapshot::capture_all
//!  (dispatch on arrival)                     |
//!                               +------------+-------------+
//!                               v                          v
//!                     CoverageEvaluator::update   DetectionTracker::accumulate
//!                     (own interval)              (on coverage passes)
//! ```

use log::{info, warn};

use crate::agent::{AgentId, AgentSnapshot, SearchAgent};
use crate::config::DrishtiConfig;
use crate::core::Point3;
use crate::coverage::{CoverageEvaluator, CoverageStats};
use crate::detection::DetectionTracker;
use crate::error::Result;
use crate::mission::{MissionDriver, MissionStep};
use crate::world::{Raycaster, TerrainHeight};

/// What one session tick did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStep {
    /// Driver report
    pub mission: MissionStep,
    /// A coverage pass ran this tick
    pub coverage_pass: bool,
}

/// A running coverage search.
pub struct SearchSession {
    driver: MissionDriver,
    evaluator: CoverageEvaluator,
    detection: Option<DetectionTracker>,
    raycaster: Box<dyn Raycaster>,
    ticks: u64,
    elapsed: f32,
}

impl SearchSession {
    /// Validate `config`, plan every agent's path and build the coverage grid.
    pub fn new<A: SearchAgent>(
        config: &DrishtiConfig,
        agents: &mut [A],
        raycaster: Box<dyn Raycaster>,
        terrain: &dyn TerrainHeight,
    ) -> Result<Self> {
        config.validate().inspect_err(|e| warn!("[Session] Rejected config: {}", e))?;

        let driver = MissionDriver::initialize(config.mission_config(), agents, terrain)?;
        let evaluator = CoverageEvaluator::build(
            &config.search_area(),
            config.coverage_settings(),
            raycaster.as_ref(),
        )?;
        let detection = config.detection.enabled.then(|| {
            DetectionTracker::new(config.detection_model(), config.detection.targets.iter().copied())
        });

        info!(
            "[Session] Ready: {} agents, {} cells, detection {}",
            driver.agent_count(),
            evaluator.grid().cell_count(),
            if detection.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            driver,
            evaluator,
            detection,
            raycaster,
            ticks: 0,
            elapsed: 0.0,
        })
    }

    /// Advance one tick.
    ///
    /// The driver runs first, then one snapshot of every agent is taken and
    /// shared by the coverage evaluator and the detection tracker.
    pub fn step<A: SearchAgent>(&mut self, dt: f32, agents: &mut [A]) -> SessionStep {
        self.ticks += 1;
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }

        let mission = self.driver.step(dt, agents);

        let snapshots = AgentSnapshot::capture_all(agents);
        let coverage_pass = self
            .evaluator
            .update(dt, &snapshots, self.raycaster.as_ref());

        if coverage_pass && let Some(tracker) = self.detection.as_mut() {
            let positions: Vec<Point3> = snapshots.iter().map(|s| s.position).collect();
            tracker.accumulate(&positions, self.raycaster.as_ref());
        }

        SessionStep {
            mission,
            coverage_pass,
        }
    }

    /// Run one coverage pass immediately, outside the interval schedule.
    pub fn evaluate_now<A: SearchAgent>(&mut self, agents: &[A]) -> usize {
        self.evaluator
            .evaluate_agents(agents, self.raycaster.as_ref())
    }

    /// Offline detection estimate from the planned paths.
    ///
    /// Returns None when detection is disabled.
    pub fn estimate_detection(&self, samples: usize) -> Option<DetectionTracker> {
        let tracker = self.detection.as_ref()?;
        let mut estimate = DetectionTracker::new(
            *tracker.model(),
            tracker.targets().iter().map(|t| t.position),
        );
        estimate.sample_paths(self.driver.sampled_paths(), samples, self.raycaster.as_ref());
        Some(estimate)
    }

    /// The swarm has flown every path
    pub fn is_complete(&self) -> bool {
        self.driver.is_all_finished()
    }

    /// Ticks stepped
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated seconds stepped
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Position at progress `t` along an agent's path
    pub fn sample_position(&self, t: f32, agent: AgentId) -> Point3 {
        self.driver.sample_position(t, agent)
    }

    /// An agent's waypoints
    pub fn path(&self, agent: AgentId) -> &[Point3] {
        self.driver.path(agent)
    }

    /// An agent's path length
    pub fn path_length(&self, agent: AgentId) -> f32 {
        self.driver.path_length(agent)
    }

    /// Raw coverage percent
    pub fn coverage_percentage(&self) -> f32 {
        self.evaluator.coverage_percentage()
    }

    /// Coverage percent of observable cells
    pub fn effective_coverage_percentage(&self) -> f32 {
        self.evaluator.effective_coverage_percentage()
    }

    /// World centers of unobserved cells
    pub fn uncovered_cells(&self) -> Vec<Point3> {
        self.evaluator.uncovered_cells()
    }

    /// Forget observations (occlusion is kept)
    pub fn reset_coverage(&mut self) {
        self.evaluator.reset();
        if let Some(tracker) = self.detection.as_mut() {
            tracker.reset();
        }
    }

    /// Coverage metrics
    pub fn coverage_stats(&self) -> CoverageStats {
        self.evaluator.stats()
    }

    /// Mission driver
    pub fn driver(&self) -> &MissionDriver {
        &self.driver
    }

    /// Coverage evaluator
    pub fn evaluator(&self) -> &CoverageEvaluator {
        &self.evaluator
    }

    /// Online detection tracker (None when disabled)
    pub fn detection(&self) -> Option<&DetectionTracker> {
        self.detection.as_ref()
    }
}
