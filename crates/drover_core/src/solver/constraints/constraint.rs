use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

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
    capacity_constraint::CapacityConstraint,
    feasibility::Feasibility,
    insertion_context::InsertionContext,
    maximum_jobs_constraint::MaximumJobsConstraint,
    skill_constraint::SkillConstraint,
    unsupported_constraint_error::UnsupportedConstraintError,
};

pub trait HardConstraint {
    /// Route state the constraint reads, if any.
    fn required_state(&self) -> Option<TrackedState>;

    fn evaluate_insertion(&self, context: &InsertionContext) -> Result<Feasibility, StateError>;

    /// Re-checks a route as it stands. Requires the route to be fresh.
    fn evaluate_route(
        &self,
        problem: &VehicleRoutingProblem,
        tracker: &StateTracker,
        route: &Route,
    ) -> Result<Feasibility, StateError>;
}

/// Name of a built-in hard constraint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Skills,
    MaximumJobs,
    Capacity,
}

impl ConstraintKind {
    pub const ALL: [ConstraintKind; 3] = [
        ConstraintKind::Skills,
        ConstraintKind::MaximumJobs,
        ConstraintKind::Capacity,
    ];

    pub fn constraint_name(&self) -> &'static str {
        match self {
            ConstraintKind::Skills => "skills",
            ConstraintKind::MaximumJobs => "maximum_jobs",
            ConstraintKind::Capacity => "capacity",
        }
    }

    /// Lower ranks are evaluated first. Position independent checks run
    /// before the capacity check.
    pub fn evaluation_rank(&self) -> u8 {
        match self {
            ConstraintKind::Skills => 0,
            ConstraintKind::MaximumJobs => 1,
            ConstraintKind::Capacity => 2,
        }
    }

    pub fn create(&self) -> Constraint {
        match self {
            ConstraintKind::Skills => Constraint::Skills(SkillConstraint),
            ConstraintKind::MaximumJobs => Constraint::MaximumJobs(MaximumJobsConstraint),
            ConstraintKind::Capacity => Constraint::Capacity(CapacityConstraint),
        }
    }
}

impl Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.constraint_name())
    }
}

impl FromStr for ConstraintKind {
    type Err = UnsupportedConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstraintKind::ALL
            .into_iter()
            .find(|kind| kind.constraint_name() == s)
            .ok_or_else(|| UnsupportedConstraintError::Unknown(s.to_owned()))
    }
}

#[derive(Debug, Clone)]
pub enum Constraint {
    Skills(SkillConstraint),
    MaximumJobs(MaximumJobsConstraint),
    Capacity(CapacityConstraint),
}

impl Constraint {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Skills(_) => ConstraintKind::Skills,
            Constraint::MaximumJobs(_) => ConstraintKind::MaximumJobs,
            Constraint::Capacity(_) => ConstraintKind::Capacity,
        }
    }

    pub fn constraint_name(&self) -> &'static str {
        self.kind().constraint_name()
    }
}

impl HardConstraint for Constraint {
    fn required_state(&self) -> Option<TrackedState> {
        match self {
            Constraint::Skills(c) => c.required_state(),
            Constraint::MaximumJobs(c) => c.required_state(),
            Constraint::Capacity(c) => c.required_state(),
        }
    }

    fn evaluate_insertion(&self, context: &InsertionContext) -> Result<Feasibility, StateError> {
        match self {
            Constraint::Skills(c) => c.evaluate_insertion(context),
            Constraint::MaximumJobs(c) => c.evaluate_insertion(context),
            Constraint::Capacity(c) => c.evaluate_insertion(context),
        }
    }

    fn evaluate_route(
        &self,
        problem: &VehicleRoutingProblem,
        tracker: &StateTracker,
        route: &Route,
    ) -> Result<Feasibility, StateError> {
        match self {
            Constraint::Skills(c) => c.evaluate_route(problem, tracker, route),
            Constraint::MaximumJobs(c) => c.evaluate_route(problem, tracker, route),
            Constraint::Capacity(c) => c.evaluate_route(problem, tracker, route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constraint_names() {
        assert_eq!("skills".parse(), Ok(ConstraintKind::Skills));
        assert_eq!("capacity".parse(), Ok(ConstraintKind::Capacity));
        assert_eq!("maximum_jobs".parse(), Ok(ConstraintKind::MaximumJobs));
        assert_eq!(
            "time_windows".parse::<ConstraintKind>(),
            Err(UnsupportedConstraintError::Unknown("time_windows".to_owned()))
        );
    }

    #[test]
    fn test_kinds_round_trip_through_create() {
        for kind in ConstraintKind::ALL {
            assert_eq!(kind.create().kind(), kind);
        }
    }

    #[test]
    fn test_skills_are_ranked_before_capacity() {
        assert!(ConstraintKind::Skills.evaluation_rank() < ConstraintKind::Capacity.evaluation_rank());
    }
}
