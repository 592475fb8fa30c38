use thiserror::Error;

/// Malformed problem input, reported by [`super::vehicle_routing_problem::VehicleRoutingProblem::build`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("duplicate vehicle type id \"{0}\"")]
    DuplicateVehicleTypeId(String),
    #[error("duplicate vehicle id \"{0}\"")]
    DuplicateVehicleId(String),
    #[error("duplicate job id \"{0}\"")]
    DuplicateJobId(String),
    #[error("vehicle type \"{vehicle_type}\" has negative capacity {value} in dimension {dimension}")]
    NegativeCapacity {
        vehicle_type: String,
        dimension: usize,
        value: i64,
    },
    #[error("job \"{job}\" has negative demand {value} in dimension {dimension}")]
    NegativeDemand {
        job: String,
        dimension: usize,
        value: i64,
    },
    #[error(
        "job \"{job}\" uses capacity dimension {dimension}, but vehicle types only define {dimensions} dimension(s)"
    )]
    DimensionOutOfRange {
        job: String,
        dimension: usize,
        dimensions: usize,
    },
    #[error("vehicle \"{vehicle}\" references unknown vehicle type index {vehicle_type}")]
    UnknownVehicleType { vehicle: String, vehicle_type: usize },
}
