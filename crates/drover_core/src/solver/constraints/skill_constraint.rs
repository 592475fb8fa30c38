use crate::{
    problem::{
        job::JobIdx, skill::SkillSet, vehicle_routing_problem::VehicleRoutingProblem,
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

/// A job may only be served by a vehicle providing every skill it requires.
///
/// Skills are fixed per vehicle, so the verdict does not depend on the
/// insertion position.
#[derive(Debug, Clone, Default)]
pub struct SkillConstraint;

impl SkillConstraint {
    fn check_job(
        problem: &VehicleRoutingProblem,
        available: &SkillSet,
        job_id: JobIdx,
    ) -> Option<Infeasibility> {
        let required = problem.job_skills(job_id);
        if required.is_subset(available) {
            return None;
        }

        let registry = problem.skill_registry();
        Some(Infeasibility::SkillMismatch {
            missing: required
                .missing_from(available)
                .into_iter()
                .map(|skill| registry.skill(skill).clone())
                .collect(),
        })
    }
}

impl HardConstraint for SkillConstraint {
    fn required_state(&self) -> Option<TrackedState> {
        Some(TrackedState::Skills)
    }

    fn evaluate_insertion(&self, context: &InsertionContext) -> Result<Feasibility, StateError> {
        let available = context.tracker.available_skills(context.route)?;
        Ok(Self::check_job(context.problem, available, context.job_id).into())
    }

    fn evaluate_route(
        &self,
        problem: &VehicleRoutingProblem,
        tracker: &StateTracker,
        route: &Route,
    ) -> Result<Feasibility, StateError> {
        let available = tracker.available_skills(route)?;
        Ok(route
            .job_ids()
            .iter()
            .find_map(|&job_id| Self::check_job(problem, available, job_id))
            .into())
    }
}
