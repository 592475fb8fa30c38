use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use drover_core::{
    problem::{
        amount::Amount,
        job::{Job, JobIdx},
        location::Location,
        skill::Skill,
        vehicle::{Vehicle, VehicleIdx},
        vehicle_routing_problem::VehicleRoutingProblem,
        vehicle_type::{VehicleType, VehicleTypeIdx},
    },
    solver::{
        constraints::{constraint::ConstraintKind, constraint_manager::ConstraintManager},
        solution::route::Route,
        state::state_tracker::{StateTracker, TrackedState},
    },
};
use rayon::prelude::*;

const JOBS: usize = 200;

fn create_problem() -> VehicleRoutingProblem {
    let vehicle_types = vec![VehicleType::new("type", Amount::from_vec(vec![1_000, 500]))];
    let vehicles = (0..8)
        .map(|index| {
            let skills = if index % 2 == 0 {
                vec![Skill::from("drill")]
            } else {
                vec![]
            };
            Vehicle::new(
                format!("vehicle-{index}"),
                Location::from_cartesian(index as f64, 0.0),
                VehicleTypeIdx::new(0),
                skills,
            )
        })
        .collect();
    let jobs = (0..JOBS)
        .map(|index| {
            let skills = if index % 5 == 0 {
                vec![Skill::from("drill")]
            } else {
                vec![]
            };
            Job::new(
                index.to_string(),
                Location::from_cartesian((index % 20) as f64, (index / 20) as f64),
                Amount::from_vec(vec![(index % 4) as i64, (index % 3) as i64]),
                skills,
            )
        })
        .collect();

    VehicleRoutingProblem::build(vehicle_types, vehicles, jobs).unwrap()
}

fn create_full_route(problem: &VehicleRoutingProblem, tracker: &StateTracker) -> Route {
    let mut route = tracker.create_route(problem, VehicleIdx::new(0));
    for job in 0..JOBS {
        route.insert(JobIdx::new(job), job).unwrap();
    }
    tracker.refresh(problem, &mut route, 0);
    route
}

fn refresh_benchmark(c: &mut Criterion) {
    let problem = create_problem();
    let tracker = StateTracker::default();
    let route = create_full_route(&problem, &tracker);

    c.bench_function("refresh suffix after removal", |b| {
        b.iter_batched(
            || {
                let mut route = route.clone();
                let job_id = route.remove(JOBS / 2).unwrap();
                route.insert(job_id, JOBS / 2).unwrap();
                route
            },
            |mut route| tracker.refresh(black_box(&problem), &mut route, JOBS / 2),
            BatchSize::SmallInput,
        )
    });
}

fn evaluate_benchmark(c: &mut Criterion) {
    let problem = create_problem();
    let tracker = StateTracker::new([TrackedState::Loads, TrackedState::Skills]);
    let manager = ConstraintManager::with_constraints(
        &tracker,
        [ConstraintKind::Skills, ConstraintKind::Capacity],
    )
    .unwrap();

    let mut route = tracker.create_route(&problem, VehicleIdx::new(0));
    for job in 0..JOBS / 2 {
        route.insert(JobIdx::new(job), job).unwrap();
    }
    tracker.refresh(&problem, &mut route, 0);

    let candidate = JobIdx::new(JOBS - 1);

    c.bench_function("evaluate insertion", |b| {
        b.iter(|| {
            manager.evaluate(
                black_box(&problem),
                black_box(&route),
                black_box(JOBS / 4),
                black_box(candidate),
            )
        })
    });

    c.bench_function("feasible positions", |b| {
        b.iter(|| manager.feasible_positions(black_box(&problem), black_box(&route), candidate))
    });

    let routes = (0..problem.vehicles().len())
        .map(|vehicle| tracker.create_route(&problem, VehicleIdx::new(vehicle)))
        .collect::<Vec<_>>();

    c.bench_function("evaluate all jobs on empty routes (rayon)", |b| {
        b.iter(|| {
            routes
                .par_iter()
                .map(|route| {
                    (0..JOBS)
                        .filter(|&job| {
                            manager
                                .evaluate(&problem, route, 0, JobIdx::new(job))
                                .is_ok_and(|feasibility| feasibility.is_feasible())
                        })
                        .count()
                })
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, refresh_benchmark, evaluate_benchmark);
criterion_main!(benches);
