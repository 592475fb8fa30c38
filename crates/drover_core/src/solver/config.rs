use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::solver::{
    constraints::{
        constraint::ConstraintKind, constraint_manager::ConstraintManager,
        unsupported_constraint_error::UnsupportedConstraintError,
    },
    state::state_tracker::{StateTracker, TrackedState},
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Unsupported(#[from] UnsupportedConstraintError),
}

/// Which route states are maintained and which hard constraints are active.
///
/// ```json
/// { "states": ["loads", "skills"], "constraints": ["skills", "capacity"] }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FeasibilityConfig {
    pub states: Vec<TrackedState>,
    pub constraints: Vec<String>,
}

impl Default for FeasibilityConfig {
    fn default() -> Self {
        FeasibilityConfig {
            states: vec![TrackedState::Loads],
            constraints: vec![ConstraintKind::Capacity.to_string()],
        }
    }
}

impl FeasibilityConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Validates the configuration and creates the tracker and constraint
    /// manager it describes.
    pub fn build(&self) -> Result<(StateTracker, ConstraintManager), UnsupportedConstraintError> {
        let tracker = StateTracker::new(self.states.iter().copied());
        let kinds = self
            .constraints
            .iter()
            .map(|name| name.parse::<ConstraintKind>())
            .collect::<Result<Vec<_>, _>>()?;

        let manager = ConstraintManager::with_constraints(&tracker, kinds)?;

        debug!(states = ?self.states, constraints = ?self.constraints, "built feasibility configuration");

        Ok((tracker, manager))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tracks_loads_and_checks_capacity() {
        let (tracker, manager) = FeasibilityConfig::default().build().unwrap();

        assert!(tracker.is_tracking(TrackedState::Loads));
        assert!(!tracker.is_tracking(TrackedState::Skills));
        assert_eq!(manager.kinds(), vec![ConstraintKind::Capacity]);

        assert_eq!(
            FeasibilityConfig::from_json_str("{}").unwrap(),
            FeasibilityConfig::default()
        );
    }

    #[test]
    fn test_skills_configuration() {
        let config = FeasibilityConfig::from_json_str(
            r#"{ "states": ["loads", "skills"], "constraints": ["capacity", "skills"] }"#,
        )
        .unwrap();

        let (tracker, manager) = config.build().unwrap();

        assert!(tracker.is_tracking(TrackedState::Skills));
        assert_eq!(
            manager.kinds(),
            vec![ConstraintKind::Skills, ConstraintKind::Capacity]
        );
    }

    #[test]
    fn test_rejects_unsupported_configurations() {
        let config = FeasibilityConfig::from_json_str(r#"{ "constraints": ["skills"] }"#).unwrap();
        assert_eq!(
            config.build().unwrap_err(),
            UnsupportedConstraintError::MissingState {
                constraint: ConstraintKind::Skills,
                state: TrackedState::Skills,
            }
        );

        let config = FeasibilityConfig::from_json_str(r#"{ "constraints": ["time_windows"] }"#).unwrap();
        assert_eq!(
            config.build().unwrap_err(),
            UnsupportedConstraintError::Unknown("time_windows".to_owned())
        );

        assert!(matches!(
            FeasibilityConfig::from_json_str(r#"{ "states": ["fuel"] }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            FeasibilityConfig::from_path("/nonexistent/drover.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
