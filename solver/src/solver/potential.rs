use itertools::Itertools;
use na::Vector3;
use nvekin_core::periodic::minimum_image_vector;
use nvekin_core::{Particle, ParticleSystem};

/// Pairwise interaction used by the integrator and the pressure estimator.
pub trait Potential {
    /// Force acting on `p1` from `p2`. `distance` is the minimum image vector pointing from `p1` to `p2`.
    fn force(&self, p1: &Particle, p2: &Particle, distance: &Vector3<f64>) -> Vector3<f64>;
}

/// Force-shifted Lennard-Jones parameters of one particle pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LennardJones {
    sigma: f64,
    eps: f64,
    r_cut: f64,
    f_cut: f64,
}

impl LennardJones {
    pub fn new(sigma: f64, eps: f64) -> Self {
        let r_cut = sigma * 2.5;
        let mut potential = Self {
            sigma,
            eps,
            r_cut,
            f_cut: 0.0,
        };
        potential.f_cut = potential.radial_coefficient(r_cut);
        potential
    }

    /// Lorentz-Berthelot combining rules.
    pub fn mixed(p1: &Particle, p2: &Particle) -> Self {
        Self::new(0.5 * (p1.sigma + p2.sigma), (p1.epsilon * p2.epsilon).sqrt())
    }

    pub fn r_cut(&self) -> f64 {
        self.r_cut
    }

    /// `4 eps (-12 sigma / r^13 + 6 sigma / r^7)`.
    ///
    /// Sigma enters linearly, not as `sigma^12` and `sigma^6`. Both the dynamics and the
    /// pressure depend on this form, so it must not be replaced by the textbook one.
    fn radial_coefficient(&self, r: f64) -> f64 {
        4.0 * self.eps * (-12.0 * self.sigma / r.powi(13) + 6.0 * self.sigma / r.powi(7))
    }

    /// Shifted radial coefficient, zero at and beyond the cutoff.
    pub fn radial_force(&self, r: f64) -> f64 {
        if r >= self.r_cut {
            return 0.0;
        }
        self.radial_coefficient(r) - self.f_cut
    }

    /// Force on the first particle of a pair separated by `distance`.
    /// The shift is applied along the same direction `distance / r`.
    pub fn force(&self, distance: &Vector3<f64>) -> Vector3<f64> {
        let r = distance.magnitude();
        if r >= self.r_cut {
            return Vector3::zeros();
        }
        distance * (self.radial_force(r) / r)
    }
}

/// Force-shifted Lennard-Jones with parameters mixed per pair from the particles.
///
/// Mixed parameters and cutoff shifts for every pair of known `(sigma, epsilon)` kinds
/// are computed once in [ForceShiftedLennardJones::new]. Particles of other kinds are
/// mixed on the fly.
#[derive(Clone, Debug, Default)]
pub struct ForceShiftedLennardJones {
    kinds: Vec<(f64, f64)>,
    pairs: Vec<LennardJones>,
}

impl ForceShiftedLennardJones {
    pub fn new(particles: &[Particle]) -> Self {
        let mut kinds: Vec<(f64, f64)> = vec![];
        for particle in particles {
            let kind = (particle.sigma, particle.epsilon);
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        let pairs = kinds.iter()
            .cartesian_product(kinds.iter())
            .map(|(&(sigma1, eps1), &(sigma2, eps2))| {
                LennardJones::new(0.5 * (sigma1 + sigma2), (eps1 * eps2).sqrt())
            })
            .collect();
        Self {
            kinds,
            pairs,
        }
    }

    /// Number of distinct `(sigma, epsilon)` kinds with precomputed pairs.
    pub fn kind_count(&self) -> usize {
        self.kinds.len()
    }

    fn kind_of(&self, particle: &Particle) -> Option<usize> {
        self.kinds.iter().position(|&(sigma, eps)| sigma == particle.sigma && eps == particle.epsilon)
    }

    pub fn pair(&self, p1: &Particle, p2: &Particle) -> LennardJones {
        match (self.kind_of(p1), self.kind_of(p2)) {
            (Some(k1), Some(k2)) => self.pairs[k1 * self.kinds.len() + k2],
            _ => LennardJones::mixed(p1, p2),
        }
    }
}

impl Potential for ForceShiftedLennardJones {
    fn force(&self, p1: &Particle, p2: &Particle, distance: &Vector3<f64>) -> Vector3<f64> {
        self.pair(p1, p2).force(distance)
    }
}

/// Zeroes every acceleration and accumulates pair forces over all unordered pairs.
///
/// Positions are only read here. Each pair force is evaluated once and applied
/// with opposite signs to both particles.
pub fn update_accelerations(system: &mut ParticleSystem, potential: &impl Potential) {
    let boundary_box = *system.boundary_box();
    let particles = system.particles_mut();
    particles.iter_mut().for_each(|particle| {
        particle.acceleration = Vector3::zeros();
    });
    for (i, j) in (0..particles.len()).tuple_combinations() {
        let distance = minimum_image_vector(&particles[i].position, &particles[j].position, &boundary_box);
        let force = potential.force(&particles[i], &particles[j], &distance);
        let mass_i = particles[i].mass;
        let mass_j = particles[j].mass;
        particles[i].acceleration += force / mass_i;
        particles[j].acceleration -= force / mass_j;
    }
}
