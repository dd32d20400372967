//! Headless simulation: kinematic agents and a scenario loop.

mod agent;
mod runner;

pub use agent::SimulatedAgent;
pub use runner::{AgentReport, DetectionReport, ScenarioReport, ScenarioRunner};
