use fxhash::FxHashSet;
use serde::Serialize;

use crate::{
    define_index_newtype,
    problem::{location::Location, skill::Skill, vehicle_type::VehicleTypeIdx},
};

define_index_newtype!(VehicleIdx, Vehicle);

#[derive(Serialize, Debug, Clone)]
pub struct Vehicle {
    external_id: String,
    start_location: Location,
    vehicle_type_id: VehicleTypeIdx,
    skills: FxHashSet<Skill>,
    maximum_jobs: Option<usize>,
}

impl Vehicle {
    pub fn new(
        external_id: impl Into<String>,
        start_location: Location,
        vehicle_type_id: VehicleTypeIdx,
        skills: impl IntoIterator<Item = Skill>,
    ) -> Self {
        Vehicle {
            external_id: external_id.into(),
            start_location,
            vehicle_type_id,
            skills: skills.into_iter().collect(),
            maximum_jobs: None,
        }
    }

    /// Limits the number of jobs a route of this vehicle may hold.
    pub fn with_maximum_jobs(mut self, maximum_jobs: usize) -> Self {
        self.maximum_jobs = Some(maximum_jobs);
        self
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn start_location(&self) -> &Location {
        &self.start_location
    }

    pub fn vehicle_type_id(&self) -> VehicleTypeIdx {
        self.vehicle_type_id
    }

    pub fn skills(&self) -> &FxHashSet<Skill> {
        &self.skills
    }

    pub fn maximum_jobs(&self) -> Option<usize> {
        self.maximum_jobs
    }
}
