use thiserror::Error;

use super::state_tracker::TrackedState;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The route was mutated at or before `position` since the last refresh.
    #[error(
        "state at position {position} is stale: route was mutated from position {stale_from} since the last refresh"
    )]
    Stale { position: usize, stale_from: usize },
    #[error("position {position} is out of bounds for a route of length {len}")]
    PositionOutOfBounds { position: usize, len: usize },
    #[error("{0} state is not tracked")]
    NotTracked(TrackedState),
}
