use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::error::SaveError;
use crate::snapshot::{Observer, ParticleSnapshot, Snapshot};

/// One line of the snapshot table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SnapshotRow {
    pub index: usize,
    pub posx: f64,
    pub posy: f64,
    pub posz: f64,
    pub velox: f64,
    pub veloy: f64,
    pub veloz: f64,
    pub accx: f64,
    pub accy: f64,
    pub accz: f64,
}

impl SnapshotRow {
    fn new(index: usize, particle: &ParticleSnapshot) -> Self {
        Self {
            index,
            posx: particle.position.x,
            posy: particle.position.y,
            posz: particle.position.z,
            velox: particle.velocity.x,
            veloy: particle.velocity.y,
            veloz: particle.velocity.z,
            accx: particle.acceleration.x,
            accy: particle.acceleration.y,
            accz: particle.acceleration.z,
        }
    }
}

/// Writes every snapshot to `directory/{prefix}{step}.csv`, one row per particle.
pub struct CsvSnapshotWriter {
    directory: PathBuf,
    prefix: String,
}

impl CsvSnapshotWriter {
    /// Creates `directory` if it doesn't exist.
    pub fn new(directory: &Path, prefix: &str) -> Result<Self, SaveError> {
        fs::create_dir_all(directory)?;
        Ok(Self {
            directory: directory.to_path_buf(),
            prefix: prefix.to_string(),
        })
    }

    pub fn path_for_step(&self, step: usize) -> PathBuf {
        self.directory.join(format!("{}{}.csv", self.prefix, step))
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<PathBuf, SaveError> {
        let path = self.path_for_step(snapshot.step);
        save_snapshot_to_file(snapshot, &path)?;
        Ok(path)
    }
}

impl Observer for CsvSnapshotWriter {
    fn snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SaveError> {
        let path = self.save(snapshot)?;
        log::debug!("saved {}", path.display());
        Ok(())
    }
}

/// Writes the table next to `path` first and renames it into place,
/// so an interrupted run never leaves a truncated snapshot behind.
pub fn save_snapshot_to_file(snapshot: &Snapshot, path: &Path) -> Result<(), SaveError> {
    let temp_path = temporary_path(path);
    let mut writer = csv::Writer::from_path(&temp_path)?;
    for (index, particle) in snapshot.particles.iter().enumerate() {
        writer.serialize(SnapshotRow::new(index, particle))?;
    }
    writer.flush()?;
    drop(writer);
    fs::rename(&temp_path, path)?;
    Ok(())
}

fn temporary_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|name| name.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Reads back the rows of a snapshot table in file order.
pub fn load_snapshot_rows(path: &Path) -> Result<Vec<SnapshotRow>, SaveError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = vec![];
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
