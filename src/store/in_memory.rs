//! InMemoryVehicleStore - HashMap-backed vehicle store.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::VehicleStore;
use crate::error::VehicleError;
use crate::vehicle::{Vehicle, VehicleId};

/// In-memory vehicle store backed by a HashMap behind one `RwLock`.
///
/// Every mutation runs under the write lock, every read under the read lock,
/// so a reader never sees a half-applied change. Clone-friendly via Arc:
/// clones share the same collection.
#[derive(Clone)]
pub struct InMemoryVehicleStore {
    storage: Arc<RwLock<HashMap<VehicleId, Vehicle>>>,
}

impl Default for InMemoryVehicleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryVehicleStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::with_vehicles(HashMap::new())
    }

    /// Create a store seeded with an existing collection.
    pub fn with_vehicles(vehicles: HashMap<VehicleId, Vehicle>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(vehicles)),
        }
    }

    fn read(
        &self,
        operation: &str,
    ) -> Result<RwLockReadGuard<'_, HashMap<VehicleId, Vehicle>>, VehicleError> {
        self.storage
            .read()
            .map_err(|_| VehicleError::Storage(format!("lock poisoned during {}", operation)))
    }

    fn write(
        &self,
        operation: &str,
    ) -> Result<RwLockWriteGuard<'_, HashMap<VehicleId, Vehicle>>, VehicleError> {
        self.storage
            .write()
            .map_err(|_| VehicleError::Storage(format!("lock poisoned during {}", operation)))
    }
}

impl VehicleStore for InMemoryVehicleStore {
    fn find_all(&self) -> Result<HashMap<VehicleId, Vehicle>, VehicleError> {
        Ok(self.read("find_all")?.clone())
    }

    fn find_by_id(&self, id: VehicleId) -> Result<Vec<Vehicle>, VehicleError> {
        let storage = self.read("find_by_id")?;
        storage
            .get(&id)
            .map(|vehicle| vec![vehicle.clone()])
            .ok_or(VehicleError::NotFound(id))
    }

    fn create(&self, vehicle: Vehicle) -> Result<(), VehicleError> {
        vehicle.validate()?;

        let mut storage = self.write("create")?;
        if storage.contains_key(&vehicle.id) {
            return Err(VehicleError::AlreadyExists(vehicle.id));
        }
        storage.insert(vehicle.id, vehicle);
        Ok(())
    }

    fn create_batch(&self, vehicles: Vec<Vehicle>) -> Result<(), VehicleError> {
        for vehicle in &vehicles {
            vehicle.validate()?;
        }

        let mut storage = self.write("create_batch")?;

        // Checked against the untouched map and the batch itself before any insert.
        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            if storage.contains_key(&vehicle.id) || !seen.insert(vehicle.id) {
                return Err(VehicleError::AlreadyExists(vehicle.id));
            }
        }

        for vehicle in vehicles {
            storage.insert(vehicle.id, vehicle);
        }
        Ok(())
    }

    fn delete(&self, id: VehicleId) -> Result<(), VehicleError> {
        let mut storage = self.write("delete")?;
        storage
            .remove(&id)
            .map(|_| ())
            .ok_or(VehicleError::NotFound(id))
    }

    fn update_speed(&self, id: VehicleId, max_speed: f64) -> Result<(), VehicleError> {
        let mut storage = self.write("update_speed")?;
        let vehicle = storage.get_mut(&id).ok_or(VehicleError::NotFound(id))?;
        vehicle.max_speed = max_speed;
        Ok(())
    }

    fn update_fuel_type(&self, id: VehicleId, fuel_type: &str) -> Result<(), VehicleError> {
        let mut storage = self.write("update_fuel_type")?;
        let vehicle = storage.get_mut(&id).ok_or(VehicleError::NotFound(id))?;
        vehicle.fuel_type = fuel_type.to_string();
        Ok(())
    }

    fn find(&self, predicate: &dyn Fn(&Vehicle) -> bool) -> Result<Vec<Vehicle>, VehicleError> {
        let storage = self.read("find")?;
        Ok(storage
            .values()
            .filter(|vehicle| predicate(vehicle))
            .cloned()
            .collect())
    }

    fn len(&self) -> Result<usize, VehicleError> {
        Ok(self.read("len")?.len())
    }
}
