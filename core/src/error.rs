use thiserror::Error;

/// Invalid [SimulationConfig](crate::SimulationConfig) values, rejected before any step runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("simulation must contain at least one particle")]
    NoParticles,
    #[error("density must be positive, got {0}")]
    NonPositiveDensity(f64),
    #[error("box edge lengths must be positive and finite, got {0}")]
    InvalidBoxLength(f64),
    #[error("time step must be positive, got {0}")]
    NonPositiveTimeStep(f64),
    #[error("target temperature must be positive, got {0}")]
    NonPositiveTemperature(f64),
    #[error("species '{name}' has invalid parameters: {reason}")]
    InvalidSpecies { name: String, reason: &'static str },
    #[error("thermostat coupling time {tau} must not be shorter than the time step {delta_time}")]
    CouplingTimeTooShort { tau: f64, delta_time: f64 },
    #[error("report interval must be at least one step")]
    ZeroReportInterval,
    #[error("at least one placement attempt per particle is required")]
    ZeroPlacementAttempts,
}

/// Failures while writing or reading snapshots and configuration files.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that end a simulation run.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("kinetic energy is zero, velocities can't be rescaled to a target temperature")]
    DegenerateTemperature,
    #[error("couldn't place particle {particle} after {attempts} attempts, lower the density or enlarge the box")]
    PackingInfeasible { particle: usize, attempts: usize },
    #[error("particle {particle} has non-finite state after step {step}")]
    NumericInstability { step: usize, particle: usize },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("snapshot sink failed: {0}")]
    Save(#[from] SaveError),
}
