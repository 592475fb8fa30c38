use crate::{
    problem::{
        amount::{Amount, AmountExpression},
        vehicle_routing_problem::VehicleRoutingProblem,
    },
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

/// The load carried by a vehicle may never exceed its type's capacity in any
/// dimension.
#[derive(Debug, Clone, Default)]
pub struct CapacityConstraint;

fn check_load(load: impl AmountExpression, capacity: &Amount) -> Option<Infeasibility> {
    load.first_exceeded_dimension(capacity)
        .map(|dimension| Infeasibility::CapacityExceeded {
            dimension,
            load: load.get(dimension),
            capacity: capacity.get(dimension),
        })
}

impl HardConstraint for CapacityConstraint {
    fn required_state(&self) -> Option<TrackedState> {
        Some(TrackedState::Loads)
    }

    fn evaluate_insertion(&self, context: &InsertionContext) -> Result<Feasibility, StateError> {
        let demand = context.job().demand();
        let capacity = context.problem.vehicle_capacity(context.route.vehicle_id());

        // Every position from the insertion point onwards carries the new
        // demand on top of its current load.
        let peak = context
            .tracker
            .peak_load_from(context.route, context.position)?;

        Ok(check_load(peak + demand, capacity).into())
    }

    fn evaluate_route(
        &self,
        problem: &VehicleRoutingProblem,
        tracker: &StateTracker,
        route: &Route,
    ) -> Result<Feasibility, StateError> {
        let load = tracker.peak_load_from(route, 0)?;
        Ok(check_load(load, problem.vehicle_capacity(route.vehicle_id())).into())
    }
}
