mod pressure;

use na::Vector3;
use nvekin_core::ParticleSystem;
pub use pressure::*;

/// Get velocity of center of mass of all particles
pub fn get_center_of_mass_velocity(system: &ParticleSystem) -> Vector3<f64> {
    let total_mass: f64 = system.particles().iter().map(|particle| particle.mass).sum();
    system.total_momentum() / total_mass
}
