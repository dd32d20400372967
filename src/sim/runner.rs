//! Scenario runner: a complete search from a configuration.

use std::fmt;

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::agent::AgentId;
use crate::config::DrishtiConfig;
use crate::coverage::CoverageStats;
use crate::error::Result;
use crate::session::SearchSession;
use crate::world::{FlatTerrain, NoOcclusion, Raycaster, TerrainHeight};

use super::agent::SimulatedAgent;

/// Per-agent results.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgentReport {
    /// Agent index
    pub agent: AgentId,
    /// Planned path length (meters)
    pub path_length: f32,
    /// Distance actually flown (meters)
    pub distance_flown: f32,
    /// Waypoints in the planned path
    pub waypoints: usize,
    /// Cells this agent observed first
    pub cells_observed: usize,
}

/// Detection results.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetectionReport {
    /// Cumulative probability per target from the live run
    pub probabilities: Vec<f32>,
    /// Cumulative probability per target from offline path sampling
    pub estimated: Vec<f32>,
    /// Seeded detection outcome per target
    pub detected: Vec<bool>,
}

/// Outcome of [`ScenarioRunner::run`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Ticks executed
    pub ticks: u64,
    /// Simulated seconds
    pub elapsed: f32,
    /// Every agent finished its path before the tick limit
    pub completed: bool,
    /// Final coverage
    pub coverage: CoverageStats,
    /// Per-agent results in AgentId order
    pub agents: Vec<AgentReport>,
    /// Detection results when enabled
    pub detection: Option<DetectionReport>,
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} after {} ticks ({:.1}s)",
            if self.completed { "Completed" } else { "Stopped" },
            self.ticks,
            self.elapsed
        )?;
        writeln!(f, "Coverage: {}", self.coverage)?;
        for a in &self.agents {
            writeln!(
                f,
                "  {}: {} waypoints, path {:.1}m, flown {:.1}m, {} cells",
                a.agent, a.waypoints, a.path_length, a.distance_flown, a.cells_observed
            )?;
        }
        if let Some(d) = &self.detection {
            let hits = d.detected.iter().filter(|x| **x).count();
            writeln!(f, "Detection: {}/{} targets", hits, d.detected.len())?;
            for (i, (p, e)) in d.probabilities.iter().zip(&d.estimated).enumerate() {
                writeln!(f, "  target {}: P = {:.3} (planned {:.3})", i, p, e)?;
            }
        }
        Ok(())
    }
}

/// Runs a full simulated search.
pub struct ScenarioRunner {
    config: DrishtiConfig,
    raycaster: Box<dyn Raycaster>,
    terrain: Box<dyn TerrainHeight>,
}

impl ScenarioRunner {
    /// Runner over an empty, flat world.
    pub fn new(config: DrishtiConfig) -> Self {
        Self {
            config,
            raycaster: Box::new(NoOcclusion),
            terrain: Box::new(FlatTerrain),
        }
    }

    /// Use `raycaster` for occlusion and line of sight.
    pub fn with_raycaster(mut self, raycaster: Box<dyn Raycaster>) -> Self {
        self.raycaster = raycaster;
        self
    }

    /// Use `terrain` for waypoint altitude.
    pub fn with_terrain(mut self, terrain: Box<dyn TerrainHeight>) -> Self {
        self.terrain = terrain;
        self
    }

    /// Spawn the swarm and tick until it finishes or `run.max_ticks` is hit.
    pub fn run(self) -> Result<ScenarioReport> {
        let config = self.config;
        let area = config.search_area();
        let swarm = &config.swarm;

        let mut agents: Vec<SimulatedAgent> = swarm
            .spawn_points(&area)
            .into_iter()
            .map(|p| SimulatedAgent::new(p, swarm.speed, swarm.arrival_tolerance, swarm.sensor))
            .collect();

        let mut session =
            SearchSession::new(&config, &mut agents, self.raycaster, self.terrain.as_ref())?;

        let dt = config.run.dt;
        while !session.is_complete() && session.ticks() < config.run.max_ticks {
            session.step(dt, &mut agents);
            for agent in &mut agents {
                agent.advance(dt);
            }
        }
        // Final positions may not have had a pass yet
        session.evaluate_now(&agents);

        let completed = session.is_complete();
        if !completed {
            warn!(
                "[Scenario] Tick limit {} reached before the swarm finished",
                config.run.max_ticks
            );
        }

        let evaluator = session.evaluator();
        let agent_reports = agents
            .iter()
            .enumerate()
            .map(|(i, agent)| {
                let id = AgentId(i);
                AgentReport {
                    agent: id,
                    path_length: session.path_length(id),
                    distance_flown: agent.distance_flown(),
                    waypoints: session.path(id).len(),
                    cells_observed: evaluator.contribution(id),
                }
            })
            .collect();

        let detection = session.detection().map(|tracker| {
            let estimated = session
                .estimate_detection(config.detection.samples)
                .map(|e| e.probabilities())
                .unwrap_or_default();
            let mut rng = StdRng::seed_from_u64(config.detection.seed);
            DetectionReport {
                probabilities: tracker.probabilities(),
                estimated,
                detected: tracker.roll(&mut rng),
            }
        });

        let report = ScenarioReport {
            ticks: session.ticks(),
            elapsed: session.elapsed(),
            completed,
            coverage: session.coverage_stats(),
            agents: agent_reports,
            detection,
        };

        info!(
            "[Scenario] {} ticks, {:.1}% effective coverage",
            report.ticks,
            report.coverage.effective_percentage()
        );

        Ok(report)
    }
}
