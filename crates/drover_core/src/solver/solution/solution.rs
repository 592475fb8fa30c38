use fxhash::FxHashSet;
use serde::Serialize;

use crate::{
    problem::{job::JobIdx, vehicle_routing_problem::VehicleRoutingProblem},
    solver::solution::{route::Route, solution_error::SolutionError},
};

/// A complete candidate: routes, jobs left unassigned and the total cost
/// computed by the optimizer.
#[derive(Serialize, Debug, Clone)]
pub struct Solution {
    routes: Vec<Route>,
    unassigned_jobs: FxHashSet<JobIdx>,
    cost: f64,
}

impl Solution {
    pub fn new(
        routes: Vec<Route>,
        unassigned_jobs: impl IntoIterator<Item = JobIdx>,
        cost: f64,
    ) -> Self {
        Solution {
            routes,
            unassigned_jobs: unassigned_jobs.into_iter().collect(),
            cost,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn non_empty_routes_iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|route| !route.is_empty())
    }

    pub fn unassigned_jobs(&self) -> &FxHashSet<JobIdx> {
        &self.unassigned_jobs
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Checks that every job of `problem` is either visited exactly once or
    /// unassigned, and that no vehicle drives more than one route.
    pub fn validate(&self, problem: &VehicleRoutingProblem) -> Result<(), SolutionError> {
        let mut vehicles = FxHashSet::default();
        let mut routed = FxHashSet::default();

        for route in self.non_empty_routes_iter() {
            if !vehicles.insert(route.vehicle_id()) {
                return Err(SolutionError::VehicleUsedTwice(
                    route.vehicle(problem).external_id().to_owned(),
                ));
            }

            for &job_id in route.job_ids() {
                let external_id = || problem.job(job_id).external_id().to_owned();

                if !routed.insert(job_id) {
                    return Err(SolutionError::JobAssignedTwice(external_id()));
                }

                if self.unassigned_jobs.contains(&job_id) {
                    return Err(SolutionError::JobRoutedAndUnassigned(external_id()));
                }
            }
        }

        for index in 0..problem.jobs().len() {
            let job_id = JobIdx::new(index);
            if !routed.contains(&job_id) && !self.unassigned_jobs.contains(&job_id) {
                return Err(SolutionError::JobMissing(
                    problem.job(job_id).external_id().to_owned(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{solver::state::state_tracker::StateTracker, test_utils};

    #[test]
    fn test_validate_partition() {
        let problem = test_utils::create_skills_scenario();
        let tracker = StateTracker::default();
        let job = |id: &str| problem.job_id(id).unwrap();

        let mut route = tracker.create_route(&problem, problem.vehicle_id("vehicle").unwrap());
        route.insert(job("1"), 0).unwrap();
        route.insert(job("2"), 1).unwrap();
        let mut route2 = tracker.create_route(&problem, problem.vehicle_id("vehicle2").unwrap());
        route2.insert(job("4"), 0).unwrap();

        let solution = Solution::new(vec![route.clone(), route2.clone()], [job("3")], 10.0);
        assert_eq!(solution.validate(&problem), Ok(()));

        let solution = Solution::new(vec![route.clone(), route2.clone()], [], 10.0);
        assert_eq!(
            solution.validate(&problem),
            Err(SolutionError::JobMissing("3".to_owned()))
        );

        let solution = Solution::new(vec![route.clone(), route2.clone()], [job("3"), job("4")], 10.0);
        assert_eq!(
            solution.validate(&problem),
            Err(SolutionError::JobRoutedAndUnassigned("4".to_owned()))
        );

        let mut duplicate = tracker.create_route(&problem, problem.vehicle_id("vehicle2").unwrap());
        duplicate.insert(job("1"), 0).unwrap();
        let solution = Solution::new(vec![route.clone(), duplicate], [job("3"), job("4")], 10.0);
        assert_eq!(
            solution.validate(&problem),
            Err(SolutionError::JobAssignedTwice("1".to_owned()))
        );

        let mut same_vehicle = tracker.create_route(&problem, problem.vehicle_id("vehicle").unwrap());
        same_vehicle.insert(job("3"), 0).unwrap();
        let solution = Solution::new(vec![route, same_vehicle, route2], [], 10.0);
        assert_eq!(
            solution.validate(&problem),
            Err(SolutionError::VehicleUsedTwice("vehicle".to_owned()))
        );
    }
}
