use na::Vector3;
use serde::{Deserialize, Serialize};
use crate::error::SaveError;

/// State of one particle at the moment of a [Snapshot].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub acceleration: Vector3<f64>,
}

/// Immutable copy of the particle system taken between steps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Step after which the copy was taken, 0 is the initial configuration
    pub step: usize,
    pub particles: Vec<ParticleSnapshot>,
}

/// Instantaneous macro parameters reported between steps.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub step: usize,
    pub temperature: f64,
    pub pressure: f64,
}

/// Consumer of simulation output. Called only between steps.
pub trait Observer {
    fn snapshot(&mut self, _snapshot: &Snapshot) -> Result<(), SaveError> {
        Ok(())
    }

    fn diagnostics(&mut self, _diagnostics: &Diagnostics) {}
}

/// Observer that drops everything.
pub struct NullObserver;

impl Observer for NullObserver {}
