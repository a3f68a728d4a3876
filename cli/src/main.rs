use std::process;
use clap::Parser;
use nvekin_core::SimulationError;
use crate::args::*;
use crate::commands::{generate_default_config, load_config, run, sum_velocities};

mod args;
mod commands;

#[cfg(test)]
mod tests;

fn execute(args: &Args) -> Result<(), SimulationError> {
    match &args.command {
        Commands::Run {
            out_dir,
            prefix,
            steps,
            seed,
            no_save,
        } => {
            let config = load_config(&args.config)?;
            run(config, out_dir, prefix, *steps, *seed, *no_save)?;
        }
        Commands::GenerateDefaultConfig { path } => {
            generate_default_config(path)?;
        }
        Commands::SumVelocities { snapshot } => {
            let p = sum_velocities(snapshot)?;
            println!("{} {} {}", p.x, p.y, p.z);
        }
    }
    Ok(())
}

/// `RUST_LOG` if set, `info` otherwise so step diagnostics are visible.
fn logger_env() -> env_logger::Env<'static> {
    env_logger::Env::default().default_filter_or("info")
}

fn main() {
    env_logger::Builder::from_env(logger_env()).init();
    let args = Args::parse();
    if let Err(err) = execute(&args) {
        log::error!("{}", err);
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
