use nvekin_core::{ConfigError, ParticleSystem, SimulationError};
use serde::{Deserialize, Serialize};

/// Velocity rescaling applied at the end of every step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Thermostat {
    /// Exact rescale to the target temperature, kinetic energy is pinned every step
    Isokinetic,
    /// Weak coupling with time constant `tau`.
    /// Paper: <https://pure.rug.nl/ws/files/64380902/1.448118.pdf>
    Berendsen {
        tau: f64,
    },
}

impl Thermostat {
    pub fn validate(&self, delta_time: f64) -> Result<(), ConfigError> {
        match self {
            Thermostat::Isokinetic => Ok(()),
            Thermostat::Berendsen { tau } => {
                // lambda^2 stays positive only while tau >= delta_time
                if *tau >= delta_time {
                    Ok(())
                } else {
                    Err(ConfigError::CouplingTimeTooShort {
                        tau: *tau,
                        delta_time,
                    })
                }
            }
        }
    }

    /// Scale velocity
    pub fn update(&self, system: &mut ParticleSystem, delta_time: f64,
                  target_temperature: f64) -> Result<(), SimulationError> {
        match self {
            Thermostat::Isokinetic => system.rescale_to_temperature(target_temperature),
            Thermostat::Berendsen { tau } => {
                let temperature = system.temperature();
                if temperature == 0.0 {
                    return Err(SimulationError::DegenerateTemperature);
                }
                let lambda_squared = 1.0 + delta_time / *tau * (target_temperature / temperature - 1.0);
                system.scale_velocities(lambda_squared.sqrt());
                Ok(())
            }
        }
    }
}
