use crate::solver::solution::solution::Solution;

use super::{
    empty_candidate_set_error::EmptyCandidateSetError,
    select_best_selector::SelectBestSelector, solution_selector::SolutionSelector,
};

/// Returns the best of `candidates`: the lowest cost, then the fewest
/// unassigned jobs, then the first one given.
pub fn best_of(candidates: &[Solution]) -> Result<&Solution, EmptyCandidateSetError> {
    SelectBestSelector
        .select_solution(candidates)
        .ok_or(EmptyCandidateSetError)
}
