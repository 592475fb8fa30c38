pub mod config;
pub mod constraints;
pub mod solution;
pub mod state;
