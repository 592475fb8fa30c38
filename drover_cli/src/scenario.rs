use drover_core::problem::{
    amount::Amount,
    job::Job,
    location::Location,
    skill::Skill,
    validation_error::ValidationError,
    vehicle::Vehicle,
    vehicle_routing_problem::VehicleRoutingProblem,
    vehicle_type::{VehicleType, VehicleTypeIdx},
};

/// Two vehicles of capacity 2, one of them equipped with a drill, and four
/// single-unit jobs of which one needs the drill.
pub fn skills_scenario() -> Result<VehicleRoutingProblem, ValidationError> {
    let vehicle_type = VehicleType::new("vehicleType", Amount::from_vec(vec![2]));

    let vehicles = vec![
        Vehicle::new(
            "vehicle",
            Location::from_cartesian(10.0, 10.0),
            VehicleTypeIdx::new(0),
            [],
        ),
        Vehicle::new(
            "vehicle2",
            Location::from_cartesian(1.0, 1.0),
            VehicleTypeIdx::new(0),
            [Skill::from("drill")],
        ),
    ];

    let jobs = [
        ("1", 5.0, 7.0, None),
        ("2", 5.0, 13.0, None),
        ("3", 15.0, 7.0, None),
        ("4", 15.0, 13.0, Some("drill")),
    ]
    .into_iter()
    .map(|(id, x, y, skill)| {
        Job::new(
            id,
            Location::from_cartesian(x, y),
            Amount::from_vec(vec![1]),
            skill.map(Skill::from),
        )
    })
    .collect();

    VehicleRoutingProblem::build(vec![vehicle_type], vehicles, jobs)
}
