pub mod amount;
pub mod job;
pub mod location;
pub mod skill;
pub mod validation_error;
pub mod vehicle;
pub mod vehicle_routing_problem;
pub mod vehicle_type;
