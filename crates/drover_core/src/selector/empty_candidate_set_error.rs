use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot select the best of an empty set of solutions")]
pub struct EmptyCandidateSetError;
