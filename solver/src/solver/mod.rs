mod integrator;
mod potential;
mod simulation;
mod verlet;

pub use integrator::*;
pub use potential::*;
pub use simulation::*;
pub use verlet::*;
