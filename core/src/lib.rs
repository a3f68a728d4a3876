mod error;
mod particle;
pub mod periodic;
mod save_data;
mod snapshot;
extern crate nalgebra as na;
extern crate serde;

pub use error::{ConfigError, SaveError, SimulationError};
pub use particle::{Particle, ParticleSystem};
pub use save_data::{load_snapshot_rows, save_snapshot_to_file, CsvSnapshotWriter, SnapshotRow};
pub use snapshot::{Diagnostics, NullObserver, Observer, ParticleSnapshot, Snapshot};
