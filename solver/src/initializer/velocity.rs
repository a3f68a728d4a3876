use na::Vector3;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// How initial velocity components are drawn before the first rescale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VelocityDistribution {
    /// Every component uniform in `[-0.5, 0.5)`
    #[default]
    Uniform,
    /// Every component normal with variance `T / m`
    MaxwellBoltzmann,
}

impl VelocityDistribution {
    pub fn sample<R: Rng>(&self, rng: &mut R, mass: f64, temperature: f64) -> Vector3<f64> {
        match self {
            VelocityDistribution::Uniform => Vector3::new(
                rng.gen::<f64>() - 0.5,
                rng.gen::<f64>() - 0.5,
                rng.gen::<f64>() - 0.5,
            ),
            VelocityDistribution::MaxwellBoltzmann => {
                let sigma = (temperature / mass).sqrt();
                let x: f64 = rng.sample(StandardNormal);
                let y: f64 = rng.sample(StandardNormal);
                let z: f64 = rng.sample(StandardNormal);
                Vector3::new(x, y, z) * sigma
            }
        }
    }
}
