//! Loader - Seed data for a store, read from a JSON fixture file.
//!
//! The file holds a JSON array of vehicles using the same wire names as the
//! HTTP transport (`year`, `passengers`, ...).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::vehicle::{Vehicle, VehicleId};

/// Error type for fixture loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate vehicle id {0} in fixture")]
    DuplicateId(VehicleId),
}

/// A JSON file of vehicles.
#[derive(Debug, Clone)]
pub struct VehicleJsonFile {
    path: PathBuf,
}

impl VehicleJsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file into a collection keyed by id.
    pub fn load(&self) -> Result<HashMap<VehicleId, Vehicle>, LoadError> {
        let bytes = fs::read(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let vehicles: Vec<Vehicle> =
            serde_json::from_slice(&bytes).map_err(|source| LoadError::Decode {
                path: self.path.clone(),
                source,
            })?;

        let mut db = HashMap::with_capacity(vehicles.len());
        for vehicle in vehicles {
            let id = vehicle.id;
            if db.insert(id, vehicle).is_some() {
                return Err(LoadError::DuplicateId(id));
            }
        }

        tracing::info!(path = %self.path.display(), count = db.len(), "loaded vehicles");
        Ok(db)
    }
}
