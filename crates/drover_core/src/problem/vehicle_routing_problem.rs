use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, instrument};

use crate::{
    problem::{
        amount::{Amount, AmountExpression},
        job::{Job, JobIdx},
        skill::{SkillRegistry, SkillSet},
        validation_error::ValidationError,
        vehicle::{Vehicle, VehicleIdx},
        vehicle_type::{VehicleType, VehicleTypeIdx},
    },
    utils::enumerate_idx::EnumerateIdx,
};

/// Immutable description of the fleet and the jobs to serve.
///
/// Built once through [`VehicleRoutingProblem::build`] and then only read, so
/// it can be shared between search workers behind an `Arc`.
#[derive(Debug)]
pub struct VehicleRoutingProblem {
    vehicle_types: Vec<VehicleType>,
    vehicles: Vec<Vehicle>,
    jobs: Vec<Job>,

    skill_registry: SkillRegistry,
    vehicle_skills: Vec<SkillSet>,
    job_skills: Vec<SkillSet>,

    vehicle_ids: FxHashMap<String, VehicleIdx>,
    job_ids: FxHashMap<String, JobIdx>,

    has_skills: bool,
    precomputed_capacity_dimensions: usize,
    precomputed_vehicle_compatibilities: Vec<bool>,
}

impl VehicleRoutingProblem {
    #[instrument(skip_all, level = "debug")]
    pub fn build(
        vehicle_types: Vec<VehicleType>,
        vehicles: Vec<Vehicle>,
        jobs: Vec<Job>,
    ) -> Result<Self, ValidationError> {
        let mut vehicle_type_ids = FxHashSet::default();
        for vehicle_type in &vehicle_types {
            if !vehicle_type_ids.insert(vehicle_type.external_id()) {
                return Err(ValidationError::DuplicateVehicleTypeId(
                    vehicle_type.external_id().to_owned(),
                ));
            }

            if let Some(dimension) = vehicle_type.capacity().first_negative_dimension() {
                return Err(ValidationError::NegativeCapacity {
                    vehicle_type: vehicle_type.external_id().to_owned(),
                    dimension,
                    value: vehicle_type.capacity()[dimension],
                });
            }
        }

        let capacity_dimensions = vehicle_types
            .iter()
            .map(|vehicle_type| vehicle_type.capacity().len())
            .max()
            .unwrap_or(0);

        let mut vehicle_ids = FxHashMap::default();
        for (vehicle_id, vehicle) in vehicles.iter().enumerate_idx() {
            if vehicle.vehicle_type_id().get() >= vehicle_types.len() {
                return Err(ValidationError::UnknownVehicleType {
                    vehicle: vehicle.external_id().to_owned(),
                    vehicle_type: vehicle.vehicle_type_id().get(),
                });
            }

            if vehicle_ids
                .insert(vehicle.external_id().to_owned(), vehicle_id)
                .is_some()
            {
                return Err(ValidationError::DuplicateVehicleId(
                    vehicle.external_id().to_owned(),
                ));
            }
        }

        let mut job_ids = FxHashMap::default();
        for (job_id, job) in jobs.iter().enumerate_idx() {
            if job_ids.insert(job.external_id().to_owned(), job_id).is_some() {
                return Err(ValidationError::DuplicateJobId(job.external_id().to_owned()));
            }

            if let Some(dimension) = job.demand().first_negative_dimension() {
                return Err(ValidationError::NegativeDemand {
                    job: job.external_id().to_owned(),
                    dimension,
                    value: job.demand()[dimension],
                });
            }

            let used_dimensions = job.demand().used_dimensions();
            if used_dimensions > capacity_dimensions {
                return Err(ValidationError::DimensionOutOfRange {
                    job: job.external_id().to_owned(),
                    dimension: used_dimensions - 1,
                    dimensions: capacity_dimensions,
                });
            }
        }

        // Intern everything first so that all skill sets share the same length.
        let mut skill_registry = SkillRegistry::default();
        for skill in vehicles
            .iter()
            .flat_map(|vehicle| vehicle.skills())
            .chain(jobs.iter().flat_map(|job| job.skills()))
        {
            skill_registry.intern(skill);
        }

        let vehicle_skills = vehicles
            .iter()
            .map(|vehicle| skill_registry.skill_set(vehicle.skills()))
            .collect::<Vec<_>>();
        let job_skills = jobs
            .iter()
            .map(|job| skill_registry.skill_set(job.skills()))
            .collect::<Vec<_>>();

        let precomputed_vehicle_compatibilities =
            VehicleRoutingProblem::precompute_vehicle_compatibilities(&vehicle_skills, &job_skills);

        debug!(
            vehicle_types = vehicle_types.len(),
            vehicles = vehicles.len(),
            jobs = jobs.len(),
            skills = skill_registry.len(),
            capacity_dimensions,
            "built vehicle routing problem"
        );

        Ok(VehicleRoutingProblem {
            has_skills: !skill_registry.is_empty(),
            vehicle_types,
            vehicles,
            jobs,
            skill_registry,
            vehicle_skills,
            job_skills,
            vehicle_ids,
            job_ids,
            precomputed_capacity_dimensions: capacity_dimensions,
            precomputed_vehicle_compatibilities,
        })
    }

    pub fn vehicle_types(&self) -> &[VehicleType] {
        &self.vehicle_types
    }

    pub fn vehicle_type(&self, vehicle_type_id: VehicleTypeIdx) -> &VehicleType {
        &self.vehicle_types[vehicle_type_id]
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, vehicle_id: VehicleIdx) -> &Vehicle {
        &self.vehicles[vehicle_id]
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn job(&self, job_id: JobIdx) -> &Job {
        &self.jobs[job_id]
    }

    pub fn vehicle_id(&self, external_id: &str) -> Option<VehicleIdx> {
        self.vehicle_ids.get(external_id).copied()
    }

    pub fn job_id(&self, external_id: &str) -> Option<JobIdx> {
        self.job_ids.get(external_id).copied()
    }

    /// Capacity of the vehicle's type.
    pub fn vehicle_capacity(&self, vehicle_id: VehicleIdx) -> &Amount {
        self.vehicle_type(self.vehicle(vehicle_id).vehicle_type_id())
            .capacity()
    }

    /// Largest number of capacity dimensions defined by any vehicle type.
    pub fn capacity_dimensions(&self) -> usize {
        self.precomputed_capacity_dimensions
    }

    pub fn has_skills(&self) -> bool {
        self.has_skills
    }

    pub fn skill_registry(&self) -> &SkillRegistry {
        &self.skill_registry
    }

    pub fn vehicle_skills(&self, vehicle_id: VehicleIdx) -> &SkillSet {
        &self.vehicle_skills[vehicle_id.get()]
    }

    pub fn job_skills(&self, job_id: JobIdx) -> &SkillSet {
        &self.job_skills[job_id.get()]
    }

    /// Whether the vehicle possesses every skill the job requires.
    pub fn is_job_compatible_with_vehicle(&self, vehicle_id: VehicleIdx, job_id: JobIdx) -> bool {
        self.precomputed_vehicle_compatibilities[vehicle_id.get() * self.jobs.len() + job_id.get()]
    }

    fn precompute_vehicle_compatibilities(
        vehicle_skills: &[SkillSet],
        job_skills: &[SkillSet],
    ) -> Vec<bool> {
        let mut compatibilities = Vec::with_capacity(vehicle_skills.len() * job_skills.len());

        for possessed in vehicle_skills {
            compatibilities.extend(job_skills.iter().map(|required| required.is_subset(possessed)));
        }

        compatibilities
    }
}
