use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolutionError {
    #[error("job \"{0}\" is visited more than once")]
    JobAssignedTwice(String),
    #[error("job \"{0}\" is both routed and unassigned")]
    JobRoutedAndUnassigned(String),
    #[error("job \"{0}\" is neither routed nor unassigned")]
    JobMissing(String),
    #[error("vehicle \"{0}\" is used by more than one route")]
    VehicleUsedTwice(String),
}
