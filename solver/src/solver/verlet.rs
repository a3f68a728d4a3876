use nvekin_core::{ParticleSystem, SimulationError};
use crate::initializer::Thermostat;
use crate::solver::{update_accelerations, Integrator, Potential};

/// Velocity Verlet with a thermostat applied after the second half kick.
/// <https://doi.org/10.1103/PhysRev.159.98>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityVerlet {
    pub thermostat: Thermostat,
    pub target_temperature: f64,
}

impl VelocityVerlet {
    pub fn new(thermostat: Thermostat, target_temperature: f64) -> Self {
        Self {
            thermostat,
            target_temperature,
        }
    }

    fn half_kick(system: &mut ParticleSystem, delta_time: f64) {
        system.particles_mut().iter_mut().for_each(|particle| {
            particle.velocity += 0.5 * delta_time * particle.acceleration;
        });
    }
}

impl Integrator for VelocityVerlet {
    /// Half kick with the previous accelerations, drift with wrap, fresh force pass,
    /// second half kick, then the thermostat. The order is fixed.
    fn calculate(&self, system: &mut ParticleSystem, delta_time: f64,
                 potential: &impl Potential) -> Result<(), SimulationError> {
        Self::half_kick(system, delta_time);
        system.particles_mut().iter_mut().for_each(|particle| {
            let velocity = particle.velocity;
            particle.position += delta_time * velocity;
        });
        system.apply_boundary_conditions();
        update_accelerations(system, potential);
        Self::half_kick(system, delta_time);
        self.thermostat.update(system, delta_time, self.target_temperature)
    }
}
