//! Main DrishtiConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::agent::SensorFootprint;
use crate::core::Bounds3;
use crate::coverage::CoverageSettings;
use crate::detection::DetectionModel;
use crate::mission::MissionConfig;
use crate::planning::ScanParams;

use super::coverage::CoverageSection;
use super::detection::DetectionSection;
use super::error::ConfigLoadError;
use super::planner::{AreaSection, PlannerSection};
use super::run::RunSection;
use super::swarm::SwarmSection;

/// Default config location, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "configs/drishti.yaml";

/// Full Drishti configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DrishtiConfig {
    /// Search area
    #[serde(default)]
    pub area: AreaSection,

    /// Sweep planning
    #[serde(default)]
    pub planner: PlannerSection,

    /// Coverage grid
    #[serde(default)]
    pub coverage: CoverageSection,

    /// Simulated swarm
    #[serde(default)]
    pub swarm: SwarmSection,

    /// Probabilistic detection
    #[serde(default)]
    pub detection: DetectionSection,

    /// Tick loop
    #[serde(default)]
    pub run: RunSection,
}

impl DrishtiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/drishti.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Write to a YAML file
    pub fn save(&self, path: &Path) -> Result<(), ConfigLoadError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| ConfigLoadError::Io(e.to_string()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let invalid =
            |msg: String| -> Result<(), ConfigLoadError> { Err(ConfigLoadError::Invalid(msg)) };

        if !self.search_area().is_valid() {
            return invalid(format!("area is not finite: {:?}", self.area));
        }
        let p = &self.planner;
        if !(0.0..1.0).contains(&p.overlap) {
            return invalid(format!("planner.overlap must be in [0, 1), got {}", p.overlap));
        }
        if !(p.density > 0.0) {
            return invalid(format!("planner.density must be positive, got {}", p.density));
        }
        if p.max_waypoints == 0 {
            return invalid("planner.max_waypoints must be positive".to_string());
        }
        let c = &self.coverage;
        if !(c.resolution > 0.0) || !c.resolution.is_finite() {
            return invalid(format!(
                "coverage.resolution must be positive, got {}",
                c.resolution
            ));
        }
        if !(c.evaluation_interval >= 0.0) {
            return invalid(format!(
                "coverage.evaluation_interval must be >= 0, got {}",
                c.evaluation_interval
            ));
        }
        let s = &self.swarm;
        if !(s.speed > 0.0) {
            return invalid(format!("swarm.speed must be positive, got {}", s.speed));
        }
        if !(s.sensor.radius > 0.0) {
            return invalid(format!(
                "swarm.sensor.radius must be positive, got {}",
                s.sensor.radius
            ));
        }
        let d = &self.detection;
        if !(0.0..=1.0).contains(&d.base_probability) {
            return invalid(format!(
                "detection.base_probability must be in [0, 1], got {}",
                d.base_probability
            ));
        }
        if !(self.run.dt > 0.0) {
            return invalid(format!("run.dt must be positive, got {}", self.run.dt));
        }
        Ok(())
    }

    /// Search bounds
    pub fn search_area(&self) -> Bounds3 {
        self.area.bounds()
    }

    /// Sensor footprint of every simulated agent
    pub fn sensor(&self) -> SensorFootprint {
        self.swarm.sensor
    }

    /// Scan parameters (scan radius falls back to the sensor radius)
    pub fn scan_params(&self) -> ScanParams {
        self.planner.to_scan_params(self.swarm.sensor.radius)
    }

    /// Mission driver configuration
    pub fn mission_config(&self) -> MissionConfig {
        MissionConfig {
            search_area: self.search_area(),
            pattern: self.planner.pattern,
            split_axis: self.planner.split_axis,
            scan: self.scan_params(),
            max_waypoints: self.planner.max_waypoints,
        }
    }

    /// Coverage evaluator settings
    pub fn coverage_settings(&self) -> CoverageSettings {
        self.coverage.to_settings()
    }

    /// Detection model
    pub fn detection_model(&self) -> DetectionModel {
        self.detection.to_model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::SensorShape;
    use crate::planning::{PatternKind, SplitAxis};

    #[test]
    fn test_default_config() {
        let config = DrishtiConfig::default();
        assert_eq!(config.coverage.resolution, 2.0);
        assert_eq!(config.swarm.sensor.radius, 10.0);
        assert_eq!(config.search_area().width(), 100.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DrishtiConfig::default();
        let yaml = config.to_yaml().unwrap();
        let parsed = DrishtiConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.coverage.resolution, config.coverage.resolution);
        assert_eq!(parsed.planner.pattern, config.planner.pattern);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
planner:
  pattern: spiral
  split_axis: z
swarm:
  agent_count: 4
  sensor:
    radius: 6.0
    shape:
      kind: cone
      angle_deg: 90.0
"#;
        let config = DrishtiConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.planner.pattern, PatternKind::Spiral);
        assert_eq!(config.planner.split_axis, SplitAxis::Z);
        assert_eq!(config.swarm.agent_count, 4);
        assert_eq!(config.swarm.sensor.shape, SensorShape::Cone { angle_deg: 90.0 });
        // Untouched sections keep defaults
        assert_eq!(config.planner.overlap, 0.2);
        assert_eq!(config.coverage.detection_height, 50.0);
        // Scan radius follows the sensor
        assert_eq!(config.scan_params().scan_radius, 6.0);
    }

    #[test]
    fn test_unknown_pattern_is_parse_error() {
        let err = DrishtiConfig::from_yaml("planner:\n  pattern: zigzag\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = DrishtiConfig::default();
        config.planner.overlap = 1.0;
        assert!(matches!(config.validate(), Err(ConfigLoadError::Invalid(_))));

        let mut config = DrishtiConfig::default();
        config.coverage.resolution = 0.0;
        assert!(config.validate().is_err());

        let mut config = DrishtiConfig::default();
        config.run.dt = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = DrishtiConfig::load(Path::new("/nonexistent/drishti.yaml")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drishti.yaml");

        let mut config = DrishtiConfig::default();
        config.swarm.agent_count = 5;
        config.planner.pattern = PatternKind::Diagonal;
        config.save(&path).unwrap();

        let loaded = DrishtiConfig::load(&path).unwrap();
        assert_eq!(loaded.swarm.agent_count, 5);
        assert_eq!(loaded.planner.pattern, PatternKind::Diagonal);
    }

    #[test]
    fn test_spawn_points() {
        let config = DrishtiConfig::default();
        let spawns = config.swarm.spawn_points(&config.search_area());
        assert_eq!(spawns.len(), 2);
        assert_eq!(spawns[0].x, -25.0);
        assert_eq!(spawns[1].x, 25.0);
        assert_eq!(spawns[0].z, -50.0);
    }
}
