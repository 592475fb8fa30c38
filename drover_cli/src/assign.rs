use std::path::PathBuf;

use clap::Args;
use drover_core::{
    problem::{job::JobIdx, vehicle::VehicleIdx, vehicle_routing_problem::VehicleRoutingProblem},
    selector::best_of::best_of,
    solver::{
        constraints::constraint_manager::ConstraintManager,
        solution::{route::Route, solution::Solution},
        state::state_tracker::StateTracker,
    },
};
use tracing::{debug, info};

use crate::{matrix::load_config, scenario};

const UNASSIGNED_JOB_COST: f64 = 1_000.0;

#[derive(Args)]
pub struct AssignArgs {
    /// Feasibility configuration (JSON). Defaults to skills and capacity.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Closed tour length from the vehicle's start location through every job.
fn route_distance(problem: &VehicleRoutingProblem, route: &Route) -> f64 {
    let start = route.vehicle(problem).start_location();
    let mut previous = start;
    let mut distance = 0.0;

    for &job_id in route.job_ids() {
        let location = problem.job(job_id).location();
        distance += previous.euclidean_distance(location);
        previous = location;
    }

    distance + previous.euclidean_distance(start)
}

/// Inserts the jobs in `job_order` one by one at the cheapest feasible
/// position over all routes. Jobs fitting nowhere stay unassigned.
fn construct(
    problem: &VehicleRoutingProblem,
    tracker: &StateTracker,
    manager: &ConstraintManager,
    job_order: &[JobIdx],
) -> Result<Solution, anyhow::Error> {
    let mut routes = (0..problem.vehicles().len())
        .map(|vehicle| tracker.create_route(problem, VehicleIdx::new(vehicle)))
        .collect::<Vec<_>>();
    let mut unassigned = Vec::new();

    for &job_id in job_order {
        let mut best: Option<(usize, usize, f64)> = None;

        for (route_index, route) in routes.iter().enumerate() {
            let before = route_distance(problem, route);
            for position in manager.feasible_positions(problem, route, job_id)? {
                let mut candidate = route.clone();
                candidate.insert(job_id, position)?;
                let delta = route_distance(problem, &candidate) - before;

                if best.is_none_or(|(_, _, best_delta)| delta < best_delta) {
                    best = Some((route_index, position, delta));
                }
            }
        }

        match best {
            Some((route_index, position, _)) => {
                let route = &mut routes[route_index];
                route.insert(job_id, position)?;
                tracker.refresh(problem, route, position);
            }
            None => unassigned.push(job_id),
        }
    }

    let cost = routes
        .iter()
        .map(|route| route_distance(problem, route))
        .sum::<f64>()
        + unassigned.len() as f64 * UNASSIGNED_JOB_COST;

    Ok(Solution::new(routes, unassigned, cost))
}

pub fn run(args: AssignArgs) -> Result<(), anyhow::Error> {
    let config = load_config(args.config.as_ref())?;
    let (tracker, manager) = config.build()?;
    let problem = scenario::skills_scenario()?;

    let jobs = (0..problem.jobs().len())
        .map(JobIdx::new)
        .collect::<Vec<_>>();

    // One candidate per rotation of the job list.
    let candidates = (0..jobs.len())
        .map(|offset| {
            let mut order = jobs.clone();
            order.rotate_left(offset);
            construct(&problem, &tracker, &manager, &order)
        })
        .collect::<Result<Vec<_>, _>>()?;

    for candidate in &candidates {
        candidate.validate(&problem)?;
        debug!(
            cost = candidate.cost(),
            unassigned = candidate.unassigned_jobs().len(),
            "candidate solution"
        );
    }

    let best = best_of(&candidates)?;

    info!(
        cost = best.cost(),
        unassigned = best.unassigned_jobs().len(),
        "Best solution found"
    );

    for route in best.non_empty_routes_iter() {
        let verdict = manager.check_route(&problem, route)?;
        let jobs = route
            .job_ids()
            .iter()
            .map(|&job_id| problem.job(job_id).external_id())
            .collect::<Vec<_>>();
        println!(
            "{}: {} ({})",
            route.vehicle(&problem).external_id(),
            jobs.join(" -> "),
            if verdict.is_feasible() { "feasible" } else { "infeasible" }
        );
    }

    println!("{}", serde_json::to_string_pretty(best)?);

    Ok(())
}
