use fxhash::FxHashSet;
use serde::Serialize;

use crate::{
    define_index_newtype,
    problem::{amount::Amount, location::Location, skill::Skill},
};

define_index_newtype!(JobIdx, Job);

/// A location-bound unit of work with a size demand and skill requirements.
#[derive(Serialize, Debug, Clone)]
pub struct Job {
    external_id: String,
    location: Location,
    demand: Amount,
    skills: FxHashSet<Skill>,
}

impl Job {
    pub fn new(
        external_id: impl Into<String>,
        location: Location,
        demand: Amount,
        skills: impl IntoIterator<Item = Skill>,
    ) -> Self {
        Job {
            external_id: external_id.into(),
            location,
            demand,
            skills: skills.into_iter().collect(),
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn demand(&self) -> &Amount {
        &self.demand
    }

    /// Skills a vehicle must possess to serve this job.
    pub fn skills(&self) -> &FxHashSet<Skill> {
        &self.skills
    }
}
