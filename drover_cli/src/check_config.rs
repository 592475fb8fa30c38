use std::path::PathBuf;

use clap::Args;
use drover_core::solver::config::FeasibilityConfig;
use tracing::info;

#[derive(Args)]
pub struct CheckConfigArgs {
    /// Configuration file to validate
    file: PathBuf,
}

pub fn run(args: CheckConfigArgs) -> Result<(), anyhow::Error> {
    let config = FeasibilityConfig::from_path(&args.file)?;
    let (_, manager) = config.build()?;

    info!(
        states = ?config.states,
        constraints = ?manager.kinds(),
        "Configuration {:?} is valid",
        args.file
    );

    Ok(())
}
