//! # Drishti: Swarm Coverage Search
//!
//! Plans and tracks a coverage search flown by a swarm of drones over a
//! rectangular area.
//!
//! ## Features
//!
//! - **Partitioned sweeps**: the area is split into equal strips, one per
//!   agent, each swept with a horizontal, vertical, diagonal or spiral pattern
//! - **Arc-length sampling**: smooth positions along any path from a single
//!   progress value
//! - **Grid coverage**: per-cell observed / occluded tracking with cylinder
//!   and cone sensor footprints and line-of-sight checks
//! - **Detection estimates**: cumulative per-target detection probability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use drishti::config::DrishtiConfig;
//! use drishti::sim::ScenarioRunner;
//!
//! let config = DrishtiConfig::default();
//! let report = ScenarioRunner::new(config).run()?;
//! println!("{report}");
//! # Ok::<(), drishti::PlanError>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! - **X, Z**: ground plane
//! - **Y**: altitude (up)
//!
//! ## Architecture
//!
//! - [`core`]: Point3, Bounds3, GridCoord, CoverageStatus
//! - [`world`]: raycast and terrain collaborators
//! - [`agent`]: the capability surface agents expose
//! - [`planning`]: partitioning and sweep patterns
//! - [`path`]: polylines, arc-length sampling, start rotation
//! - [`coverage`]: grid and evaluator
//! - [`mission`]: per-agent waypoint queues
//! - [`detection`]: probabilistic detection
//! - [`session`]: everything above on one tick
//! - [`sim`]: kinematic agents and a scenario loop
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   search area
//!        |  partition()
//!        v
//!   [Bounds3; n] --PathGenerator--> [Path; n] --optimize()--> waypoint queues
//!                                                                  |
//!                                                     MissionDriver::step
//!                                                                  |
//!                                                       SearchAgent::set_target
//!                                                                  |
//!                             agent positions (AgentSnapshot per tick)
//!                                   |                      |
//!                                   v                      v
//!                          CoverageEvaluator       DetectionTracker
//! ```

pub mod agent;
pub mod config;
pub mod core;
pub mod coverage;
pub mod detection;
pub mod error;
pub mod mission;
pub mod path;
pub mod planning;
pub mod session;
pub mod sim;
pub mod world;

pub use agent::{AgentId, AgentSnapshot, SearchAgent, SensorFootprint, SensorShape};
pub use config::{ConfigLoadError, DrishtiConfig};
pub use core::{Bounds3, CoverageStatus, GridCoord, Point3, Waypoint};
pub use coverage::{CoverageEvaluator, CoverageGrid, CoverageSettings, CoverageStats};
pub use detection::{DetectionModel, DetectionTracker};
pub use error::{PlanError, Result};
pub use mission::{AgentPhase, MissionConfig, MissionDriver, MissionStep, SwarmState};
pub use path::{CumulativeLengthTable, Path, SampledPath, optimize, sample_at};
pub use planning::{PathGenerator, PatternKind, ScanParams, SplitAxis, partition};
pub use session::{SearchSession, SessionStep};
pub use sim::{ScenarioReport, ScenarioRunner, SimulatedAgent};
pub use world::{BoxWorld, FlatTerrain, LayerMask, NoOcclusion, Raycaster, TerrainHeight};
