use std::{path::PathBuf, sync::Arc};

use clap::Args;
use comfy_table::Table;
use drover_core::{
    problem::{job::JobIdx, vehicle::VehicleIdx},
    solver::{config::FeasibilityConfig, constraints::feasibility::Feasibility},
};
use rayon::prelude::*;
use tracing::info;

use crate::scenario;

#[derive(Args)]
pub struct MatrixArgs {
    /// Feasibility configuration (JSON). Defaults to skills and capacity.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

pub fn load_config(path: Option<&PathBuf>) -> Result<FeasibilityConfig, anyhow::Error> {
    match path {
        Some(path) => Ok(FeasibilityConfig::from_path(path)?),
        None => Ok(FeasibilityConfig::from_json_str(
            r#"{ "states": ["loads", "skills"], "constraints": ["skills", "capacity"] }"#,
        )?),
    }
}

pub fn run(args: MatrixArgs) -> Result<(), anyhow::Error> {
    let config = load_config(args.config.as_ref())?;
    let (tracker, manager) = config.build()?;
    let problem = Arc::new(scenario::skills_scenario()?);

    info!(constraints = ?manager.kinds(), "Evaluating jobs against empty routes");

    let rows = (0..problem.jobs().len())
        .into_par_iter()
        .map(|job| -> Result<_, anyhow::Error> {
            let job_id = JobIdx::new(job);
            let verdicts = (0..problem.vehicles().len())
                .map(|vehicle| {
                    let route = tracker.create_route(&problem, VehicleIdx::new(vehicle));
                    manager.evaluate(&problem, &route, 0, job_id)
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok((job_id, verdicts))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut table = Table::new();
    let mut header = vec!["job".to_owned()];
    header.extend(
        problem
            .vehicles()
            .iter()
            .map(|vehicle| vehicle.external_id().to_owned()),
    );
    table.set_header(header);

    for (job_id, verdicts) in rows {
        let mut row = vec![problem.job(job_id).external_id().to_owned()];
        row.extend(verdicts.iter().map(|verdict| match verdict {
            Feasibility::Feasible => "feasible".to_owned(),
            Feasibility::Infeasible(reason) => reason.to_string(),
        }));
        table.add_row(row);
    }

    println!("{table}");

    Ok(())
}
