use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use na::Vector3;
use nvekin_core::{ConfigError, SaveError};
use serde::{Deserialize, Serialize};
use crate::initializer::{Thermostat, VelocityDistribution};

/// Lennard-Jones parameters and amount of one kind of particle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub name: String,
    pub sigma: f64,
    pub epsilon: f64,
    pub mass: f64,
    pub count: usize,
}

impl Species {
    pub fn new(name: &str, sigma: f64, epsilon: f64, mass: f64, count: usize) -> Self {
        Self {
            name: name.to_string(),
            sigma,
            epsilon,
            mass,
            count,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let reason = if !(self.sigma > 0.0 && self.sigma.is_finite()) {
            "sigma must be positive"
        } else if !(self.epsilon >= 0.0 && self.epsilon.is_finite()) {
            "epsilon must be non-negative"
        } else if !(self.mass > 0.0 && self.mass.is_finite()) {
            "mass must be positive"
        } else {
            return Ok(());
        };
        Err(ConfigError::InvalidSpecies {
            name: self.name.clone(),
            reason,
        })
    }
}

/// Parameters of one simulation run, in reduced Lennard-Jones units.
///
/// Never mutated once a [Simulation](crate::solver::Simulation) is built from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Particle kinds, created in list order
    pub species: Vec<Species>,
    /// Reduced number density, defines the box edge `(N / density)^(1/3)`
    pub density: f64,
    /// Target temperature, `k_B T / epsilon`
    pub temperature: f64,
    pub delta_time: f64,
    pub step_count: usize,
    /// Diagnostics and snapshots are emitted every `report_interval` steps
    pub report_interval: usize,
    /// Attempts to place one particle without overlap before giving up
    pub max_placement_attempts: usize,
    /// Seed of the initial configuration, random if not set
    pub seed: Option<u64>,
    pub velocity_distribution: VelocityDistribution,
    pub thermostat: Thermostat,
}

impl Default for SimulationConfig {
    /// Force-shifted LJ fluid near its critical point (rho* = 0.320, T* = 0.937).
    fn default() -> Self {
        Self {
            species: vec![Species::new("LJ", 1.0, 1.0, 1.0, 100)],
            density: 0.320,
            temperature: 0.937,
            delta_time: 0.008,
            step_count: 300_000,
            report_interval: 20,
            max_placement_attempts: 10_000,
            seed: None,
            velocity_distribution: VelocityDistribution::Uniform,
            thermostat: Thermostat::Isokinetic,
        }
    }
}

impl SimulationConfig {
    pub fn particle_count(&self) -> usize {
        self.species.iter().map(|species| species.count).sum()
    }

    pub fn box_length(&self) -> f64 {
        (self.particle_count() as f64 / self.density).cbrt()
    }

    pub fn boundary_box(&self) -> Vector3<f64> {
        let length = self.box_length();
        Vector3::new(length, length, length)
    }

    /// Checks every parameter before anything is allocated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count() == 0 {
            return Err(ConfigError::NoParticles);
        }
        for species in &self.species {
            species.validate()?;
        }
        if !(self.density > 0.0) {
            return Err(ConfigError::NonPositiveDensity(self.density));
        }
        let length = self.box_length();
        if !(length > 0.0 && length.is_finite()) {
            return Err(ConfigError::InvalidBoxLength(length));
        }
        if !(self.delta_time > 0.0 && self.delta_time.is_finite()) {
            return Err(ConfigError::NonPositiveTimeStep(self.delta_time));
        }
        if !(self.temperature > 0.0 && self.temperature.is_finite()) {
            return Err(ConfigError::NonPositiveTemperature(self.temperature));
        }
        if self.report_interval == 0 {
            return Err(ConfigError::ZeroReportInterval);
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::ZeroPlacementAttempts);
        }
        self.thermostat.validate(self.delta_time)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, SaveError> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), SaveError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
