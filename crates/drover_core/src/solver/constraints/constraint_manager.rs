use tracing::debug;

use crate::{
    problem::{job::JobIdx, vehicle_routing_problem::VehicleRoutingProblem},
    solver::{
        solution::route::Route,
        state::{state_error::StateError, state_tracker::StateTracker},
    },
};

use super::{
    constraint::{Constraint, ConstraintKind, HardConstraint},
    feasibility::Feasibility,
    insertion_context::InsertionContext,
    unsupported_constraint_error::UnsupportedConstraintError,
};

/// The set of active hard constraints.
///
/// Constraints are kept sorted so the cheap, position independent checks run
/// before the capacity check, and evaluation stops at the first constraint
/// rejecting the insertion.
#[derive(Debug, Clone)]
pub struct ConstraintManager {
    tracker: StateTracker,
    constraints: Vec<Constraint>,
}

impl ConstraintManager {
    /// Creates a manager with no active constraint that reads route state
    /// through `tracker`.
    pub fn new(tracker: &StateTracker) -> Self {
        ConstraintManager {
            tracker: tracker.clone(),
            constraints: Vec::new(),
        }
    }

    /// Creates a manager with every constraint of `kinds` activated.
    pub fn with_constraints(
        tracker: &StateTracker,
        kinds: impl IntoIterator<Item = ConstraintKind>,
    ) -> Result<Self, UnsupportedConstraintError> {
        let mut manager = ConstraintManager::new(tracker);
        for kind in kinds {
            manager.register(kind, tracker)?;
        }

        debug!(constraints = ?manager.kinds(), "constraint manager ready");

        Ok(manager)
    }

    /// Activates `kind`. Registering an active constraint again is a no-op.
    ///
    /// `tracker` replaces the tracker the manager reads route state through,
    /// so it must maintain the state of `kind` and of every constraint
    /// already active. Nothing changes on failure.
    pub fn register(
        &mut self,
        kind: ConstraintKind,
        tracker: &StateTracker,
    ) -> Result<(), UnsupportedConstraintError> {
        let constraint = kind.create();

        for active in self.constraints.iter().chain(std::iter::once(&constraint)) {
            if let Some(state) = active.required_state()
                && !tracker.is_tracking(state)
            {
                return Err(UnsupportedConstraintError::MissingState {
                    constraint: active.kind(),
                    state,
                });
            }
        }

        self.tracker = tracker.clone();

        if self.is_registered(kind) {
            return Ok(());
        }

        let index = self
            .constraints
            .partition_point(|c| c.kind().evaluation_rank() <= kind.evaluation_rank());
        self.constraints.insert(index, constraint);

        Ok(())
    }

    /// Activates the constraint called `name`, e.g. `"skills"`.
    pub fn register_by_name(
        &mut self,
        name: &str,
        tracker: &StateTracker,
    ) -> Result<(), UnsupportedConstraintError> {
        self.register(name.parse()?, tracker)
    }

    /// Deactivates `kind`, returning whether it was active.
    pub fn deregister(&mut self, kind: ConstraintKind) -> bool {
        let len = self.constraints.len();
        self.constraints.retain(|constraint| constraint.kind() != kind);
        self.constraints.len() != len
    }

    pub fn is_registered(&self, kind: ConstraintKind) -> bool {
        self.constraints
            .iter()
            .any(|constraint| constraint.kind() == kind)
    }

    /// Active constraints in evaluation order.
    pub fn kinds(&self) -> Vec<ConstraintKind> {
        self.constraints.iter().map(Constraint::kind).collect()
    }

    pub fn tracker(&self) -> &StateTracker {
        &self.tracker
    }

    /// Whether inserting `job_id` so that it ends up at `position` of `route`
    /// satisfies every active constraint. Returns the reason of the first
    /// constraint that rejects it.
    ///
    /// The route must be fresh from `position` onwards.
    pub fn evaluate(
        &self,
        problem: &VehicleRoutingProblem,
        route: &Route,
        position: usize,
        job_id: JobIdx,
    ) -> Result<Feasibility, StateError> {
        if position > route.len() {
            return Err(StateError::PositionOutOfBounds {
                position,
                len: route.len(),
            });
        }

        let context = InsertionContext {
            problem,
            tracker: &self.tracker,
            route,
            position,
            job_id,
        };

        for constraint in &self.constraints {
            let feasibility = constraint.evaluate_insertion(&context)?;
            if !feasibility.is_feasible() {
                return Ok(feasibility);
            }
        }

        Ok(Feasibility::Feasible)
    }

    /// Every position at which `job_id` could be inserted into `route`.
    pub fn feasible_positions(
        &self,
        problem: &VehicleRoutingProblem,
        route: &Route,
        job_id: JobIdx,
    ) -> Result<Vec<usize>, StateError> {
        let mut positions = Vec::new();
        for position in 0..=route.len() {
            if self.evaluate(problem, route, position, job_id)?.is_feasible() {
                positions.push(position);
            }
        }

        Ok(positions)
    }

    /// Re-checks a complete route against every active constraint. The route
    /// must be fresh.
    pub fn check_route(
        &self,
        problem: &VehicleRoutingProblem,
        route: &Route,
    ) -> Result<Feasibility, StateError> {
        for constraint in &self.constraints {
            let feasibility = constraint.evaluate_route(problem, &self.tracker, route)?;
            if !feasibility.is_feasible() {
                return Ok(feasibility);
            }
        }

        Ok(Feasibility::Feasible)
    }
}
