//! Configuration loading for Drishti.
//!
//! Everything comes from a single YAML file with defaults for every field,
//! so an empty file (or no file at all) is a valid configuration.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti::config::DrishtiConfig;
//!
//! // Load from default path (configs/drishti.yaml), defaults if missing
//! let config = DrishtiConfig::load_default()?;
//! config.validate()?;
//!
//! // Convert to runtime configs
//! let mission = config.mission_config();
//! let coverage = config.coverage_settings();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`AreaSection`] | Search area center and size |
//! | [`PlannerSection`] | Pattern, split axis, overlap, density, altitude |
//! | [`CoverageSection`] | Grid resolution, detection height, occlusion |
//! | [`SwarmSection`] | Agent count, speed, sensor footprint |
//! | [`DetectionSection`] | Probabilistic detection targets and model |
//! | [`RunSection`] | Tick length and tick limit |
//!
//! ## Example YAML
//!
//! ```yaml
//! area:
//!   center: { x: 0.0, y: 0.0, z: 0.0 }
//!   size: { x: 200.0, y: 0.0, z: 120.0 }
//! planner:
//!   pattern: horizontal   # horizontal | vertical | diagonal | spiral
//!   overlap: 0.2
//!   altitude: 30.0
//! coverage:
//!   resolution: 2.0       # 2m cells
//! swarm:
//!   agent_count: 4
//!   sensor:
//!     radius: 10.0
//!     shape: { kind: cone, angle_deg: 90.0 }
//! ```

mod coverage;
mod defaults;
mod detection;
mod drishti;
mod error;
mod planner;
mod run;
mod swarm;

// Re-export main types
pub use drishti::{DEFAULT_CONFIG_PATH, DrishtiConfig};
pub use error::ConfigLoadError;

// Re-export section types
pub use coverage::CoverageSection;
pub use detection::DetectionSection;
pub use planner::{AreaSection, PlannerSection};
pub use run::RunSection;
pub use swarm::SwarmSection;
