use crate::{
    problem::vehicle_routing_problem::VehicleRoutingProblem,
    solver::{
        solution::route::Route,
        state::{
            state_error::StateError,
            state_tracker::{StateTracker, TrackedState},
        },
    },
};

use super::{
    constraint::HardConstraint,
    feasibility::{Feasibility, Infeasibility},
    insertion_context::InsertionContext,
};

/// Caps the number of jobs a vehicle's route may hold.
#[derive(Debug, Clone, Default)]
pub struct MaximumJobsConstraint;

impl HardConstraint for MaximumJobsConstraint {
    fn required_state(&self) -> Option<TrackedState> {
        None
    }

    fn evaluate_insertion(&self, context: &InsertionContext) -> Result<Feasibility, StateError> {
        let Some(maximum) = context.vehicle().maximum_jobs() else {
            return Ok(Feasibility::Feasible);
        };

        if context.route.len() + 1 > maximum {
            Ok(Feasibility::Infeasible(
                Infeasibility::MaximumJobsExceeded { maximum },
            ))
        } else {
            Ok(Feasibility::Feasible)
        }
    }

    fn evaluate_route(
        &self,
        problem: &VehicleRoutingProblem,
        _tracker: &StateTracker,
        route: &Route,
    ) -> Result<Feasibility, StateError> {
        match route.vehicle(problem).maximum_jobs() {
            Some(maximum) if route.len() > maximum => Ok(Feasibility::Infeasible(
                Infeasibility::MaximumJobsExceeded { maximum },
            )),
            _ => Ok(Feasibility::Feasible),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{
        amount::Amount,
        job::Job,
        location::Location,
        vehicle::Vehicle,
        vehicle_type::{VehicleType, VehicleTypeIdx},
    };

    #[test]
    fn test_limits_route_length() {
        let problem = VehicleRoutingProblem::build(
            vec![VehicleType::new("type", Amount::from_vec(vec![10]))],
            vec![
                Vehicle::new(
                    "limited",
                    Location::from_cartesian(0.0, 0.0),
                    VehicleTypeIdx::new(0),
                    std::iter::empty(),
                )
                .with_maximum_jobs(1),
            ],
            (0..3)
                .map(|index| {
                    Job::new(
                        index.to_string(),
                        Location::from_cartesian(index as f64, 0.0),
                        Amount::from_vec(vec![1]),
                        std::iter::empty(),
                    )
                })
                .collect(),
        )
        .unwrap();
        let tracker = StateTracker::default();
        let mut route = tracker.create_route(&problem, problem.vehicle_id("limited").unwrap());

        let job_id = problem.job_id("1").unwrap();

        assert!(
            MaximumJobsConstraint
                .evaluate_insertion(&InsertionContext {
                    problem: &problem,
                    tracker: &tracker,
                    route: &route,
                    position: 0,
                    job_id,
                })
                .unwrap()
                .is_feasible()
        );

        route.insert(problem.job_id("0").unwrap(), 0).unwrap();

        assert_eq!(
            MaximumJobsConstraint.evaluate_insertion(&InsertionContext {
                problem: &problem,
                tracker: &tracker,
                route: &route,
                position: 1,
                job_id,
            }),
            Ok(Feasibility::Infeasible(
                Infeasibility::MaximumJobsExceeded { maximum: 1 }
            ))
        );
        assert!(
            MaximumJobsConstraint
                .evaluate_route(&problem, &tracker, &route)
                .unwrap()
                .is_feasible()
        );
    }
}
