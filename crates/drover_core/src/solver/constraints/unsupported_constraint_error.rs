use thiserror::Error;

use crate::solver::{constraints::constraint::ConstraintKind, state::state_tracker::TrackedState};

/// Constraint configuration that cannot be honoured.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedConstraintError {
    #[error("unknown constraint \"{0}\"")]
    Unknown(String),
    #[error("constraint \"{constraint}\" requires {state} state tracking, which is not activated")]
    MissingState {
        constraint: ConstraintKind,
        state: TrackedState,
    },
}
