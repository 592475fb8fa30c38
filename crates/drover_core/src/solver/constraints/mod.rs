pub mod capacity_constraint;
pub mod constraint;
pub mod constraint_manager;
pub mod feasibility;
pub mod insertion_context;
pub mod maximum_jobs_constraint;
pub mod skill_constraint;
pub mod unsupported_constraint_error;
