use na::Vector3;
use nvekin_core::periodic::{minimum_image_distance, wrap};
use nvekin_core::{Particle, SimulationError};
use rand::Rng;

/// Uniformly random point inside the box.
pub fn random_position<R: Rng>(rng: &mut R, boundary_box: &Vector3<f64>) -> Vector3<f64> {
    let position = Vector3::new(
        rng.gen::<f64>() * boundary_box.x,
        rng.gen::<f64>() * boundary_box.y,
        rng.gen::<f64>() * boundary_box.z,
    );
    wrap(&position, boundary_box)
}

/// True if a sphere of diameter `sigma` at `position` doesn't overlap any of `placed`.
/// Contact distance for a pair is the mixed diameter `(sigma + sigma_j) / 2`.
pub fn fits(position: &Vector3<f64>, sigma: f64, placed: &[Particle],
            boundary_box: &Vector3<f64>) -> bool {
    placed.iter().all(|other| {
        let contact = 0.5 * (sigma + other.sigma);
        minimum_image_distance(position, &other.position, boundary_box) >= contact
    })
}

/// Draws random positions until one fits next to the `placed` particles.
///
/// Returns the position and the number of attempts spent, or
/// [SimulationError::PackingInfeasible] once `max_attempts` candidates were rejected.
pub fn place_particle<R: Rng>(rng: &mut R,
                              placed: &[Particle],
                              sigma: f64,
                              boundary_box: &Vector3<f64>,
                              max_attempts: usize) -> Result<(Vector3<f64>, usize), SimulationError> {
    for attempt in 1..=max_attempts {
        let position = random_position(rng, boundary_box);
        if fits(&position, sigma, placed, boundary_box) {
            return Ok((position, attempt));
        }
    }
    Err(SimulationError::PackingInfeasible {
        particle: placed.len(),
        attempts: max_attempts,
    })
}
