use crate::problem::{
    amount::Amount,
    job::{Job, JobIdx},
    location::Location,
    skill::Skill,
    vehicle::Vehicle,
    vehicle_routing_problem::VehicleRoutingProblem,
    vehicle_type::{VehicleType, VehicleTypeIdx},
};

/// Two vehicles sharing a type with a capacity of 2, only `vehicle2` has the
/// `drill` skill. Jobs `1` to `3` need no skill, job `4` needs a drill.
pub fn create_skills_scenario() -> VehicleRoutingProblem {
    let vehicle_type = VehicleType::new("vehicleType", Amount::from_vec(vec![2]));

    let vehicles = vec![
        Vehicle::new(
            "vehicle",
            Location::from_cartesian(10.0, 10.0),
            VehicleTypeIdx::new(0),
            std::iter::empty(),
        ),
        Vehicle::new(
            "vehicle2",
            Location::from_cartesian(1.0, 1.0),
            VehicleTypeIdx::new(0),
            [Skill::from("drill")],
        ),
    ];

    let jobs = vec![
        create_job("1", (5.0, 7.0), &[]),
        create_job("2", (5.0, 13.0), &[]),
        create_job("3", (15.0, 7.0), &[]),
        create_job("4", (15.0, 13.0), &["drill"]),
    ];

    VehicleRoutingProblem::build(vec![vehicle_type], vehicles, jobs).unwrap()
}

fn create_job(id: &str, (x, y): (f64, f64), skills: &[&str]) -> Job {
    Job::new(
        id,
        Location::from_cartesian(x, y),
        Amount::from_vec(vec![1]),
        skills.iter().map(|&skill| Skill::from(skill)),
    )
}

/// One vehicle `"0"` of type `"type"` and one job per demand, identified by
/// its index.
pub fn create_single_vehicle_problem(
    capacity: Vec<i64>,
    demands: Vec<Vec<i64>>,
) -> VehicleRoutingProblem {
    let jobs = demands
        .into_iter()
        .enumerate()
        .map(|(index, demand)| {
            Job::new(
                index.to_string(),
                Location::from_cartesian(index as f64, 0.0),
                Amount::from_vec(demand),
                std::iter::empty(),
            )
        })
        .collect();

    VehicleRoutingProblem::build(
        vec![VehicleType::new("type", Amount::from_vec(capacity))],
        vec![Vehicle::new(
            "0",
            Location::from_cartesian(0.0, 0.0),
            VehicleTypeIdx::new(0),
            std::iter::empty(),
        )],
        jobs,
    )
    .unwrap()
}

/// Cumulative loads after each job, computed from scratch.
pub fn brute_force_loads(problem: &VehicleRoutingProblem, job_ids: &[JobIdx]) -> Vec<Vec<i64>> {
    let dimensions = problem.capacity_dimensions();
    let mut load = vec![0; dimensions];

    job_ids
        .iter()
        .map(|&job_id| {
            let demand = problem.job(job_id).demand();
            for (dimension, value) in load.iter_mut().enumerate() {
                *value += demand.as_slice().get(dimension).copied().unwrap_or(0);
            }
            load.clone()
        })
        .collect()
}
