mod position;
mod velocity;
mod thermostat;

pub use position::*;
pub use velocity::*;
pub use thermostat::*;

use nvekin_core::{Particle, ParticleSystem, SimulationError};
use rand::Rng;
use crate::config::SimulationConfig;

/// Builds a non-overlapping random configuration at the configured temperature.
///
/// Particles are placed one by one, species after species. Each one gets a random
/// velocity right after its position is accepted, then the whole set is rescaled
/// to `config.temperature` once.
pub fn initialize_system<R: Rng>(config: &SimulationConfig,
                                 rng: &mut R) -> Result<ParticleSystem, SimulationError> {
    config.validate()?;
    let boundary_box = config.boundary_box();
    let mut particles: Vec<Particle> = Vec::with_capacity(config.particle_count());
    let mut total_attempts = 0;
    for species in &config.species {
        for _ in 0..species.count {
            let (position, attempts) = place_particle(rng, &particles, species.sigma,
                                                      &boundary_box, config.max_placement_attempts)?;
            total_attempts += attempts;
            let velocity = config.velocity_distribution.sample(rng, species.mass, config.temperature);
            particles.push(Particle::new(position, velocity, species.epsilon, species.sigma, species.mass));
        }
    }
    log::debug!("placed {} particles in {} attempts, box edge {:.6}",
                particles.len(), total_attempts, boundary_box.x);
    let mut system = ParticleSystem::new(particles, boundary_box)?;
    system.rescale_to_temperature(config.temperature)?;
    Ok(system)
}
