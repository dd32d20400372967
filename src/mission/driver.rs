//! Mission driver: waypoint queues and completion tracking.

use std::collections::VecDeque;

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::agent::{AgentId, SearchAgent};
use crate::core::{Bounds3, Point3};
use crate::error::Result;
use crate::path::{SampledPath, optimize};
use crate::planning::{
    DEFAULT_MAX_WAYPOINTS, PathGenerator, PatternKind, ScanParams, SplitAxis, partition,
};
use crate::world::TerrainHeight;

use super::state::{AgentPhase, AgentProgress, MissionStep, SwarmState};

/// Immutable mission parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Area to search
    pub search_area: Bounds3,
    /// Sweep pattern for every agent
    pub pattern: PatternKind,
    /// Axis the area is split along
    pub split_axis: SplitAxis,
    /// Sweep spacing and altitude
    pub scan: ScanParams,
    /// Waypoint budget per agent
    pub max_waypoints: usize,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            search_area: Bounds3::from_center_size(Point3::ZERO, Point3::new(100.0, 0.0, 100.0)),
            pattern: PatternKind::Horizontal,
            split_axis: SplitAxis::X,
            scan: ScanParams::default(),
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
        }
    }
}

/// Per-agent mission data, indexed by AgentId.
#[derive(Clone, Debug)]
struct AgentSlot {
    partition: Bounds3,
    path: SampledPath,
    queue: VecDeque<Point3>,
    phase: AgentPhase,
    waypoints_reached: usize,
}

/// Drives every agent through its sweep path.
///
/// The agent set is fixed at [`MissionDriver::initialize`]; agent `i` in the
/// slice passed to [`MissionDriver::step`] must be the same agent that was
/// at index `i` during initialization.
#[derive(Clone, Debug)]
pub struct MissionDriver {
    config: MissionConfig,
    slots: Vec<AgentSlot>,
    state: SwarmState,
    ticks: u64,
    elapsed: f32,
}

impl MissionDriver {
    /// Partition the area, generate and optimize a path per agent, and
    /// dispatch each agent's first waypoint.
    ///
    /// Zero agents is not an error: the swarm starts AllFinished.
    pub fn initialize<A: SearchAgent>(
        config: MissionConfig,
        agents: &mut [A],
        terrain: &dyn TerrainHeight,
    ) -> Result<Self> {
        let mut driver = Self {
            config,
            slots: Vec::with_capacity(agents.len()),
            state: SwarmState::Running,
            ticks: 0,
            elapsed: 0.0,
        };

        if agents.is_empty() {
            warn!("[Mission] No agents, nothing to search");
            driver.state = SwarmState::AllFinished;
            return Ok(driver);
        }

        let partitions = partition(&config.search_area, agents.len(), config.split_axis)
            .inspect_err(|e| error!("[Mission] Partitioning failed ({}): {}", e.code(), e))?;

        let generator = PathGenerator::new(terrain).with_max_waypoints(config.max_waypoints);

        for (i, (agent, part)) in agents.iter_mut().zip(partitions).enumerate() {
            let raw = generator
                .generate(config.pattern, &part, &config.search_area, &config.scan)
                .inspect_err(|e| {
                    error!("[Mission] Path generation for agent {} failed ({}): {}", i, e.code(), e)
                })?;
            let path = optimize(&raw, agent.position());

            let mut queue: VecDeque<Point3> = path.points().iter().copied().collect();
            let phase = match queue.pop_front() {
                Some(first) => {
                    agent.set_target(first);
                    AgentPhase::Flying { target: first }
                }
                None => {
                    warn!("[Mission] Agent {} has an empty path", i);
                    AgentPhase::Finished
                }
            };

            let slot = AgentSlot {
                partition: part,
                queue,
                path: SampledPath::new(path),
                phase,
                waypoints_reached: 0,
            };

            debug!(
                "[Mission] Agent {}: {} waypoints, {:.1}m, partition x [{:.1}, {:.1}] z [{:.1}, {:.1}]",
                i,
                slot.path.path().len(),
                slot.path.length(),
                part.min.x,
                part.max.x,
                part.min.z,
                part.max.z
            );
            driver.slots.push(slot);
        }

        if driver.slots.iter().all(|s| s.phase.is_terminal()) {
            driver.state = SwarmState::AllFinished;
        }

        info!(
            "[Mission] {} agents, {} sweep, {:.1}m total path",
            driver.slots.len(),
            config.pattern,
            driver.slots.iter().map(|s| s.path.length()).sum::<f32>()
        );

        Ok(driver)
    }

    /// Advance one tick: agents that reached their target get the next
    /// waypoint, agents with an empty queue become Finished.
    pub fn step<A: SearchAgent>(&mut self, dt: f32, agents: &mut [A]) -> MissionStep {
        let mut report = MissionStep::default();
        if self.state == SwarmState::AllFinished {
            return report;
        }

        self.ticks += 1;
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }

        if agents.len() != self.slots.len() {
            warn!(
                "[Mission] Expected {} agents, got {}",
                self.slots.len(),
                agents.len()
            );
        }

        for (i, (slot, agent)) in self.slots.iter_mut().zip(agents.iter_mut()).enumerate() {
            if slot.phase.is_terminal() || !agent.is_close_to_target() {
                continue;
            }

            let id = AgentId(i);
            slot.waypoints_reached += 1;
            report.arrived.push(id);

            match slot.queue.pop_front() {
                Some(next) => {
                    agent.set_target(next);
                    slot.phase = AgentPhase::Flying { target: next };
                    report.dispatched.push((id, next));
                }
                None => {
                    slot.phase = AgentPhase::Finished;
                    report.finished.push(id);
                    info!(
                        "[Mission] Agent {} finished after {} waypoints ({:.1}s)",
                        i, slot.waypoints_reached, self.elapsed
                    );
                }
            }
        }

        if self.slots.iter().all(|s| s.phase.is_terminal()) {
            self.state = SwarmState::AllFinished;
            report.all_finished = true;
            info!(
                "[Mission] All {} agents finished after {} ticks ({:.1}s)",
                self.slots.len(),
                self.ticks,
                self.elapsed
            );
        }

        report
    }

    /// Swarm state
    pub fn state(&self) -> SwarmState {
        self.state
    }

    /// Every agent has drained its queue
    pub fn is_all_finished(&self) -> bool {
        self.state == SwarmState::AllFinished
    }

    /// Mission parameters
    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    /// Agents registered at initialization
    pub fn agent_count(&self) -> usize {
        self.slots.len()
    }

    /// Ticks stepped while running
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated seconds stepped while running
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Position at progress `t` along an agent's path ([`Point3::ZERO`] for
    /// unknown agents).
    pub fn sample_position(&self, t: f32, agent: AgentId) -> Point3 {
        self.slots
            .get(agent.index())
            .map(|s| s.path.position_at(t))
            .unwrap_or(Point3::ZERO)
    }

    /// An agent's waypoints (empty for unknown agents)
    pub fn path(&self, agent: AgentId) -> &[Point3] {
        self.slots
            .get(agent.index())
            .map(|s| s.path.path().points())
            .unwrap_or(&[])
    }

    /// An agent's path length (0 for unknown agents)
    pub fn path_length(&self, agent: AgentId) -> f32 {
        self.slots
            .get(agent.index())
            .map(|s| s.path.length())
            .unwrap_or(0.0)
    }

    /// An agent's path with its length table
    pub fn sampled_path(&self, agent: AgentId) -> Option<&SampledPath> {
        self.slots.get(agent.index()).map(|s| &s.path)
    }

    /// Every agent's sampled path in AgentId order
    pub fn sampled_paths(&self) -> impl Iterator<Item = &SampledPath> + '_ {
        self.slots.iter().map(|s| &s.path)
    }

    /// An agent's partition
    pub fn partition(&self, agent: AgentId) -> Option<Bounds3> {
        self.slots.get(agent.index()).map(|s| s.partition)
    }

    /// An agent's phase
    pub fn phase(&self, agent: AgentId) -> Option<AgentPhase> {
        self.slots.get(agent.index()).map(|s| s.phase)
    }

    /// An agent's progress
    pub fn progress(&self, agent: AgentId) -> Option<AgentProgress> {
        self.slots.get(agent.index()).map(|s| AgentProgress {
            agent,
            phase: s.phase.name(),
            waypoints_reached: s.waypoints_reached,
            waypoints_remaining: s.queue.len(),
            waypoints_total: s.path.path().len(),
            path_length: s.path.length(),
        })
    }
}
