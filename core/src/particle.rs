use na::Vector3;
use crate::error::{ConfigError, SimulationError};
use crate::periodic::wrap;
use crate::snapshot::{ParticleSnapshot, Snapshot};

/// Structure that keeps all data for particle
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// position of particle in 3d space, kept inside the periodic box
    pub position: Vector3<f64>,
    /// velocity of particle
    pub velocity: Vector3<f64>,
    /// Acceleration from the last force pass. Recomputed from scratch every step.
    pub acceleration: Vector3<f64>,
    /// Lennard-Jones well depth
    pub epsilon: f64,
    /// Lennard-Jones diameter
    pub sigma: f64,
    /// Mass of particle
    pub mass: f64,
}

impl Particle {
    /// Create particle with zero acceleration.
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>,
               epsilon: f64, sigma: f64, mass: f64) -> Self {
        Particle {
            position,
            velocity,
            acceleration: Vector3::zeros(),
            epsilon,
            sigma,
            mass,
        }
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    fn is_finite(&self) -> bool {
        self.position.iter()
            .chain(self.velocity.iter())
            .chain(self.acceleration.iter())
            .all(|x| x.is_finite())
    }
}

impl Default for Particle {
    /// Creates default particle for tests. Every vector is zero, `epsilon`, `sigma` and `mass` are 1.0.
    fn default() -> Self {
        Particle::new(Vector3::zeros(), Vector3::zeros(), 1.0, 1.0, 1.0)
    }
}

/// Fixed-size set of particles inside a periodic box.
///
/// Particles are never added or removed after construction.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    boundary_box: Vector3<f64>,
}

impl ParticleSystem {
    /// Creates system and wraps every particle into the box.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nalgebra::Vector3;
    /// # use nvekin_core::{Particle, ParticleSystem, ConfigError};
    /// let res = ParticleSystem::new(vec![], Vector3::new(1.0, 1.0, 1.0));
    /// assert_eq!(res.unwrap_err(), ConfigError::NoParticles);
    /// let mut particle = Particle::default();
    /// particle.position.x = -0.5;
    /// let system = ParticleSystem::new(vec![particle], Vector3::new(2.0, 2.0, 2.0)).unwrap();
    /// assert_eq!(system.particles()[0].position.x, 1.5);
    /// ```
    pub fn new(mut particles: Vec<Particle>, boundary_box: Vector3<f64>) -> Result<Self, ConfigError> {
        if particles.is_empty() {
            return Err(ConfigError::NoParticles);
        }
        if let Some(bad) = boundary_box.iter().find(|l| !(l.is_finite() && **l > 0.0)) {
            return Err(ConfigError::InvalidBoxLength(*bad));
        }
        for particle in &mut particles {
            particle.position = wrap(&particle.position, &boundary_box);
        }
        Ok(Self {
            particles,
            boundary_box,
        })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to particle state. The slice can't change length.
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn boundary_box(&self) -> &Vector3<f64> {
        &self.boundary_box
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn volume(&self) -> f64 {
        self.boundary_box.x * self.boundary_box.y * self.boundary_box.z
    }

    /// Makes every particle to satisfy periodic boundary conditions.
    pub fn apply_boundary_conditions(&mut self) {
        let bb = self.boundary_box;
        self.particles.iter_mut().for_each(|particle| {
            particle.position = wrap(&particle.position, &bb);
        });
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }

    /// Instantaneous temperature from equipartition, 3 degrees of freedom per particle.
    pub fn temperature(&self) -> f64 {
        self.kinetic_energy() / (1.5 * self.particles.len() as f64)
    }

    /// Multiplies every velocity by the same factor.
    pub fn scale_velocities(&mut self, factor: f64) {
        self.particles.iter_mut().for_each(|particle| {
            particle.velocity *= factor;
        });
    }

    /// Rescales velocities so that [ParticleSystem::temperature] equals `target`.
    ///
    /// Fails with [SimulationError::DegenerateTemperature] when the system is at rest.
    pub fn rescale_to_temperature(&mut self, target: f64) -> Result<(), SimulationError> {
        let temperature = self.temperature();
        if temperature == 0.0 {
            return Err(SimulationError::DegenerateTemperature);
        }
        self.scale_velocities((target / temperature).sqrt());
        Ok(())
    }

    /// Index of the first particle with a non-finite position, velocity or acceleration.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.particles.iter().position(|particle| !particle.is_finite())
    }

    /// Copies current state of every particle.
    pub fn snapshot(&self, step: usize) -> Snapshot {
        Snapshot {
            step,
            particles: self.particles.iter().map(|particle| ParticleSnapshot {
                position: particle.position,
                velocity: particle.velocity,
                acceleration: particle.acceleration,
            }).collect(),
        }
    }

    /// Sum of `mass * velocity` over all particles.
    pub fn total_momentum(&self) -> Vector3<f64> {
        self.particles.iter()
            .fold(Vector3::zeros(), |acc, particle| acc + particle.velocity * particle.mass)
    }
}
