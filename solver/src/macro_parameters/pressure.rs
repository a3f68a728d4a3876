use nvekin_core::periodic::minimum_image_vector;
use nvekin_core::ParticleSystem;
use crate::solver::Potential;

/// Virial pressure: `N T / V + 1 / (3 V) * sum_{i<j} -F_ij . r_ij`.
///
/// `F_ij` is the force on `i` from `j` and `r_ij` the minimum image vector from
/// `i` to `j`. Forces are evaluated again from current positions, the accelerations
/// stored in the particles are not used.
pub fn get_pressure(system: &ParticleSystem, temperature: f64, potential: &impl Potential) -> f64 {
    let particles = system.particles();
    let boundary_box = system.boundary_box();
    let volume = system.volume();
    let mut virial = 0.0;
    for i in 0..particles.len() {
        for j in 0..i {
            let distance = minimum_image_vector(&particles[i].position, &particles[j].position, boundary_box);
            let force = potential.force(&particles[i], &particles[j], &distance);
            virial -= force.dot(&distance);
        }
    }
    particles.len() as f64 * temperature / volume + virial / (3.0 * volume)
}
