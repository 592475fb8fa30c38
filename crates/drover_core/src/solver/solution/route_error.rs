use thiserror::Error;

use crate::problem::job::JobIdx;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("position {position} is out of bounds for a route of length {len}")]
    PositionOutOfBounds { position: usize, len: usize },
    #[error("job {0} is already part of the route")]
    DuplicateJob(JobIdx),
}
