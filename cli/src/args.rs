use std::path::PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// path to simulation config in JSON, defaults are used if not set
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// run simulation and save snapshots
    Run {
        /// directory for snapshot files
        #[arg(short = 'o', long, default_value = "data")]
        out_dir: PathBuf,
        /// snapshot file name prefix, files are named <prefix><step>.csv
        #[arg(long, default_value = "system")]
        prefix: String,
        /// override number of steps from config
        #[arg(short = 'n', long)]
        steps: Option<usize>,
        /// override seed of initial configuration
        #[arg(long)]
        seed: Option<u64>,
        /// don't write snapshot files
        #[arg(long)]
        no_save: bool,
    },
    /// write default config to file
    GenerateDefaultConfig {
        /// output file
        path: PathBuf,
    },
    /// sum velocities of every particle in snapshot file
    SumVelocities {
        /// snapshot file
        snapshot: PathBuf,
    },
}
