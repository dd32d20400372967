//! Error types for Drishti

use thiserror::Error;

use crate::config::ConfigLoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, PlanError>;

/// Planning and initialization errors.
///
/// Runtime queries never return these; they fall back to sentinel values so
/// a per-tick caller cannot be brought down by a stale agent index.
#[derive(Debug, Error)]
pub enum PlanError {
    /// A parameter is outside its valid domain (zero partitions, inverted
    /// bounds, non-positive grid resolution, unknown pattern name, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Path generation would exceed the configured waypoint budget
    #[error("Waypoint limit exceeded: {generated} generated (limit: {limit})")]
    WaypointLimit {
        /// Waypoints produced before generation stopped
        generated: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),
}

impl PlanError {
    /// Shorthand for [`PlanError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::WaypointLimit { .. } => "WAYPOINT_LIMIT",
            Self::Config(_) => "CONFIG",
        }
    }
}
