use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::{
    problem::{
        amount::{Amount, AmountExpression},
        skill::SkillSet,
        vehicle::VehicleIdx,
        vehicle_routing_problem::VehicleRoutingProblem,
    },
    solver::{
        solution::route::Route,
        state::{route_state::RouteState, state_error::StateError},
    },
};

/// Kind of derived route data a [`StateTracker`] maintains.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrackedState {
    /// Cumulative load per capacity dimension at every position.
    Loads,
    /// Skills available to the route's vehicle.
    Skills,
}

impl Display for TrackedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackedState::Loads => write!(f, "loads"),
            TrackedState::Skills => write!(f, "skills"),
        }
    }
}

/// Maintains the cached state of routes.
///
/// The tracker itself only holds which states are active; the cached values
/// live in the [`Route`] so they are owned (and dropped) together with it.
/// Refreshing is explicit: after mutating a route the caller must call
/// [`StateTracker::refresh`] before reading loads from the mutated position
/// onwards, otherwise [`StateError::Stale`] is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTracker {
    loads: bool,
    skills: bool,
}

impl Default for StateTracker {
    /// Tracks loads only. Skill state is opt-in.
    fn default() -> Self {
        StateTracker {
            loads: true,
            skills: false,
        }
    }
}

impl StateTracker {
    pub fn new(states: impl IntoIterator<Item = TrackedState>) -> Self {
        let mut tracker = StateTracker {
            loads: false,
            skills: false,
        };

        for state in states {
            tracker.track(state);
        }

        tracker
    }

    pub fn track(&mut self, state: TrackedState) {
        match state {
            TrackedState::Loads => self.loads = true,
            TrackedState::Skills => self.skills = true,
        }
    }

    pub fn update_skill_states(&mut self) {
        self.track(TrackedState::Skills);
    }

    pub fn is_tracking(&self, state: TrackedState) -> bool {
        match state {
            TrackedState::Loads => self.loads,
            TrackedState::Skills => self.skills,
        }
    }

    /// Creates an empty route for `vehicle_id` with fresh state.
    pub fn create_route(&self, problem: &VehicleRoutingProblem, vehicle_id: VehicleIdx) -> Route {
        let skills = self
            .skills
            .then(|| problem.vehicle_skills(vehicle_id).clone());

        Route::empty(
            vehicle_id,
            RouteState::new(problem.capacity_dimensions(), self.loads, skills),
        )
    }

    /// Recomputes the cumulative loads of every position from `from` to the
    /// end of the route.
    ///
    /// If the route was mutated before `from`, recomputation starts at the
    /// earliest mutated position instead so that no stale prefix remains.
    pub fn refresh(&self, problem: &VehicleRoutingProblem, route: &mut Route, from: usize) {
        let len = route.len();
        let Route { job_ids, state, .. } = route;

        if !state.tracks_loads {
            state.stale_from = len;
            return;
        }

        let (start, clamped) = refresh_start(from, state.stale_from, len);
        if clamped {
            warn!(
                from,
                stale_from = state.stale_from,
                "refresh requested after the first stale position, refreshing from the stale position"
            );
        }

        let mut load = state.loads[start].clone();
        for position in start..len {
            load += problem.job(job_ids[position]).demand();
            state.loads[position + 1].update(&load);
        }

        state.stale_from = len;

        trace!(start, len, "refreshed route loads");
    }

    /// Cumulative load of `dimension` after visiting `position`.
    pub fn load_at(&self, route: &Route, position: usize, dimension: usize) -> Result<i64, StateError> {
        self.load_vector_at(route, position)
            .map(|load| load.get(dimension))
    }

    /// Cumulative load vector after visiting `position`.
    pub fn load_vector_at<'a>(&self, route: &'a Route, position: usize) -> Result<&'a Amount, StateError> {
        let state = route.state();
        if !state.tracks_loads {
            return Err(StateError::NotTracked(TrackedState::Loads));
        }

        if position >= route.len() {
            return Err(StateError::PositionOutOfBounds {
                position,
                len: route.len(),
            });
        }

        if position >= state.stale_from {
            return Err(StateError::Stale {
                position,
                stale_from: state.stale_from,
            });
        }

        Ok(&state.loads[position + 1])
    }

    /// Load carried just before a job inserted at `position` would be visited.
    pub fn load_before<'a>(&self, route: &'a Route, position: usize) -> Result<&'a Amount, StateError> {
        let state = route.state();
        if !state.tracks_loads {
            return Err(StateError::NotTracked(TrackedState::Loads));
        }

        if position > route.len() {
            return Err(StateError::PositionOutOfBounds {
                position,
                len: route.len(),
            });
        }

        if position > state.stale_from {
            return Err(StateError::Stale {
                position: position - 1,
                stale_from: state.stale_from,
            });
        }

        Ok(&state.loads[position])
    }

    /// Highest cumulative load at or after `position`, or the load before
    /// `position` when it is the end of the route.
    ///
    /// Demands are non-negative, so cumulative loads never decrease along a
    /// route and the peak of any suffix is the load at the end of the route.
    /// Requires every position from `position` onwards to be fresh.
    pub fn peak_load_from<'a>(&self, route: &'a Route, position: usize) -> Result<&'a Amount, StateError> {
        if route.is_empty() || position == route.len() {
            return self.load_before(route, position);
        }

        self.load_vector_at(route, position)?;
        self.load_vector_at(route, route.len() - 1)
    }

    /// Skills available along the route.
    pub fn available_skills<'a>(&self, route: &'a Route) -> Result<&'a SkillSet, StateError> {
        route
            .state()
            .skills
            .as_ref()
            .ok_or(StateError::NotTracked(TrackedState::Skills))
    }
}

/// First position a refresh requested at `from` recomputes, and whether it
/// had to move back to an earlier stale position. A fresh route is never
/// clamped.
fn refresh_start(from: usize, stale_from: usize, len: usize) -> (usize, bool) {
    if from <= stale_from {
        (from, false)
    } else {
        (stale_from, stale_from < len)
    }
}
