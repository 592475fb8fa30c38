pub mod best_of;
pub mod empty_candidate_set_error;
pub mod select_best_selector;
pub mod solution_selector;
