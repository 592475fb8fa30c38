use crate::{
    problem::{
        job::{Job, JobIdx},
        vehicle::Vehicle,
        vehicle_routing_problem::VehicleRoutingProblem,
    },
    solver::{solution::route::Route, state::state_tracker::StateTracker},
};

/// A proposed insertion of `job_id` at `position` of `route`.
pub struct InsertionContext<'a> {
    pub problem: &'a VehicleRoutingProblem,
    pub tracker: &'a StateTracker,
    pub route: &'a Route,
    pub position: usize,
    pub job_id: JobIdx,
}

impl<'a> InsertionContext<'a> {
    pub fn problem(&self) -> &'a VehicleRoutingProblem {
        self.problem
    }

    pub fn route(&self) -> &'a Route {
        self.route
    }

    pub fn job(&self) -> &'a Job {
        self.problem.job(self.job_id)
    }

    pub fn vehicle(&self) -> &'a Vehicle {
        self.route.vehicle(self.problem)
    }
}
