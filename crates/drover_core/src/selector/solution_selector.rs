use crate::solver::solution::solution::Solution;

pub trait SolutionSelector {
    fn select_solution<'a>(&self, solutions: &'a [Solution]) -> Option<&'a Solution>;
}
