pub mod route_state;
pub mod state_error;
pub mod state_tracker;
