use std::path::{Path, PathBuf};
use indicatif::ProgressBar;
use nalgebra::Vector3;
use nvekin_core::{load_snapshot_rows, CsvSnapshotWriter, Diagnostics, Observer, SaveError,
                  SimulationError, Snapshot};
use nvekin_solver::config::SimulationConfig;
use nvekin_solver::macro_parameters::get_center_of_mass_velocity;
use nvekin_solver::solver::{RunSummary, Simulation};

/// Logs diagnostics, moves progress bar and optionally writes snapshots.
struct RunObserver {
    writer: Option<CsvSnapshotWriter>,
    progress: ProgressBar,
}

impl Observer for RunObserver {
    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SaveError> {
        match self.writer.as_mut() {
            Some(writer) => writer.snapshot(snapshot),
            None => Ok(()),
        }
    }

    fn diagnostics(&mut self, diagnostics: &Diagnostics) {
        log::info!("{} {} {}", diagnostics.step, diagnostics.temperature, diagnostics.pressure);
        self.progress.set_position(diagnostics.step as u64);
    }
}

/// Result of [run]: where it ended and the drift of the final state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunReport {
    pub summary: RunSummary,
    pub center_of_mass_velocity: Vector3<f64>,
}

pub fn load_config(path: &Option<PathBuf>) -> Result<SimulationConfig, SaveError> {
    match path {
        Some(path) => SimulationConfig::load_from_file(path),
        None => Ok(SimulationConfig::default()),
    }
}

pub fn run(mut config: SimulationConfig,
           out_dir: &Path,
           prefix: &str,
           steps: Option<usize>,
           seed: Option<u64>,
           no_save: bool) -> Result<RunReport, SimulationError> {
    if let Some(steps) = steps {
        config.step_count = steps;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    let writer = if no_save {
        None
    } else {
        Some(CsvSnapshotWriter::new(out_dir, prefix)?)
    };
    let progress = ProgressBar::new(config.step_count as u64);
    let mut simulation = Simulation::new(config)?;
    let mut observer = RunObserver {
        writer,
        progress,
    };
    let summary = simulation.run_to_completion(&mut observer)?;
    let message = if no_save {
        format!("Calculated {} steps", summary.last_step)
    } else {
        format!("Calculated {} steps. Snapshots saved to {}", summary.last_step, out_dir.to_string_lossy())
    };
    observer.progress.finish_with_message(message);
    let center_of_mass_velocity = get_center_of_mass_velocity(simulation.system());
    log::info!("center of mass velocity {} {} {}", center_of_mass_velocity.x,
               center_of_mass_velocity.y, center_of_mass_velocity.z);
    Ok(RunReport {
        summary,
        center_of_mass_velocity,
    })
}

pub fn generate_default_config(path: &Path) -> Result<(), SaveError> {
    SimulationConfig::default().save_to_file(path)
}

/// Plain sum of velocities over all rows. Equals total momentum only for unit masses.
pub fn sum_velocities(path: &Path) -> Result<Vector3<f64>, SaveError> {
    let rows = load_snapshot_rows(path)?;
    Ok(rows.iter().fold(Vector3::zeros(), |acc, row| {
        acc + Vector3::new(row.velox, row.veloy, row.veloz)
    }))
}
