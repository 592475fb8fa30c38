pub mod route;
pub mod route_error;
#[allow(clippy::module_inception)]
pub mod solution;
pub mod solution_error;
