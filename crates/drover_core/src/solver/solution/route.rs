use fxhash::FxHashSet;
use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    problem::{
        job::JobIdx,
        vehicle::{Vehicle, VehicleIdx},
        vehicle_routing_problem::VehicleRoutingProblem,
    },
    solver::{solution::route_error::RouteError, state::route_state::RouteState},
};

/// Ordered job visits of one vehicle.
///
/// Routes are created by [`crate::solver::state::state_tracker::StateTracker::create_route`]
/// and carry their cached state with them. Every mutation marks the state as
/// stale from the mutated position onwards.
#[derive(Debug, Clone)]
pub struct Route {
    pub(crate) vehicle_id: VehicleIdx,
    pub(crate) job_ids: Vec<JobIdx>,
    pub(crate) jobs: FxHashSet<JobIdx>,
    pub(crate) state: RouteState,
}

impl Route {
    pub(crate) fn empty(vehicle_id: VehicleIdx, state: RouteState) -> Self {
        Route {
            vehicle_id,
            job_ids: Vec::new(),
            jobs: FxHashSet::default(),
            state,
        }
    }

    pub fn vehicle_id(&self) -> VehicleIdx {
        self.vehicle_id
    }

    pub fn vehicle<'a>(&self, problem: &'a VehicleRoutingProblem) -> &'a Vehicle {
        problem.vehicle(self.vehicle_id)
    }

    pub fn len(&self) -> usize {
        self.job_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }

    pub fn job_ids(&self) -> &[JobIdx] {
        &self.job_ids
    }

    pub fn job_id(&self, position: usize) -> JobIdx {
        self.job_ids[position]
    }

    pub fn contains_job(&self, job_id: JobIdx) -> bool {
        self.jobs.contains(&job_id)
    }

    pub fn job_position(&self, job_id: JobIdx) -> Option<usize> {
        if !self.contains_job(job_id) {
            return None;
        }

        self.job_ids.iter().position(|&id| id == job_id)
    }

    pub fn state(&self) -> &RouteState {
        &self.state
    }

    /// Whether cached state covers every position.
    pub fn is_fresh(&self) -> bool {
        self.state.stale_from() >= self.len()
    }

    /// Inserts `job_id` so that it ends up at `position`, shifting later jobs.
    pub fn insert(&mut self, job_id: JobIdx, position: usize) -> Result<(), RouteError> {
        if position > self.len() {
            return Err(RouteError::PositionOutOfBounds {
                position,
                len: self.len(),
            });
        }

        if !self.jobs.insert(job_id) {
            return Err(RouteError::DuplicateJob(job_id));
        }

        self.job_ids.insert(position, job_id);
        self.state.on_insert(position);

        Ok(())
    }

    /// Removes and returns the job at `position`, shifting later jobs.
    pub fn remove(&mut self, position: usize) -> Result<JobIdx, RouteError> {
        if position >= self.len() {
            return Err(RouteError::PositionOutOfBounds {
                position,
                len: self.len(),
            });
        }

        let job_id = self.job_ids.remove(position);
        self.jobs.remove(&job_id);
        self.state.on_remove(position);

        Ok(job_id)
    }

    /// Removes `job_id` if present and returns the position it occupied.
    pub fn remove_job(&mut self, job_id: JobIdx) -> Option<usize> {
        let position = self.job_position(job_id)?;
        self.remove(position).ok()?;
        Some(position)
    }
}

impl Serialize for Route {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut route = serializer.serialize_struct("Route", 2)?;
        route.serialize_field("vehicle_id", &self.vehicle_id)?;
        route.serialize_field("job_ids", &self.job_ids)?;
        route.end()
    }
}
