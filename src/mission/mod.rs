//! Swarm mission orchestration.
//!
//! [`MissionDriver`] owns one waypoint queue per agent and drains it as
//! agents report arrival. It issues targets through [`crate::agent::SearchAgent`]
//! and never moves agents itself.

mod driver;
mod state;

pub use driver::{MissionConfig, MissionDriver};
pub use state::{AgentPhase, AgentProgress, MissionStep, SwarmState};
