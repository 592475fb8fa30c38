use std::cmp::Ordering;

use crate::solver::solution::solution::Solution;

use super::solution_selector::SolutionSelector;

/// Picks the cheapest solution, preferring fewer unassigned jobs on equal
/// cost and the earliest candidate on a full tie.
pub struct SelectBestSelector;

/// Orders solutions from best to worst. A NaN cost, whatever its sign, ranks
/// after every numeric cost.
pub fn compare_solutions(a: &Solution, b: &Solution) -> Ordering {
    a.cost()
        .is_nan()
        .cmp(&b.cost().is_nan())
        .then_with(|| a.cost().total_cmp(&b.cost()))
        .then_with(|| a.unassigned_jobs().len().cmp(&b.unassigned_jobs().len()))
}

impl SolutionSelector for SelectBestSelector {
    fn select_solution<'a>(&self, solutions: &'a [Solution]) -> Option<&'a Solution> {
        let mut best_solution: Option<&Solution> = None;

        for solution in solutions {
            match best_solution {
                Some(best) if compare_solutions(solution, best) != Ordering::Less => {}
                _ => best_solution = Some(solution),
            }
        }

        best_solution
    }
}
