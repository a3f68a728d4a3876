use nvekin_core::{ParticleSystem, SimulationError};
use crate::solver::Potential;

pub trait Integrator {
    /// Advances `system` by one step of `delta_time`.
    fn calculate(&self, system: &mut ParticleSystem, delta_time: f64,
                 potential: &impl Potential) -> Result<(), SimulationError>;
}
