use clap::{Parser, Subcommand};

use crate::{assign::AssignArgs, check_config::CheckConfigArgs, matrix::MatrixArgs};

mod assign;
mod check_config;
mod matrix;
mod scenario;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prints which job fits which vehicle of the built-in scenario
    Matrix {
        #[command(flatten)]
        args: MatrixArgs,
    },
    /// Builds candidate assignments of the built-in scenario and prints the best
    Assign {
        #[command(flatten)]
        args: AssignArgs,
    },
    /// Validates a feasibility configuration file
    CheckConfig {
        #[command(flatten)]
        args: CheckConfigArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Matrix { args }) => matrix::run(args)?,
        Some(Commands::Assign { args }) => assign::run(args)?,
        Some(Commands::CheckConfig { args }) => check_config::run(args)?,
        None => {}
    }

    Ok(())
}
