//! VehicleStore - Abstract keyed storage for vehicles.

use std::collections::HashMap;

use crate::error::VehicleError;
use crate::vehicle::{Vehicle, VehicleId};

/// Abstract keyed storage for vehicles.
///
/// Backends own the collection and hand out clones from every read. Filter
/// queries and aggregates are built on top of [`find`](VehicleStore::find) by
/// the `VehicleQueries`/`VehicleAggregates` extension traits, so a backend only
/// has to implement this trait to get all of them.
pub trait VehicleStore: Send + Sync {
    /// Copy of the whole collection, keyed by id.
    fn find_all(&self) -> Result<HashMap<VehicleId, Vehicle>, VehicleError>;

    /// The vehicle with this id, as a one-element list.
    ///
    /// Fails with [`VehicleError::NotFound`] when the id is absent.
    fn find_by_id(&self, id: VehicleId) -> Result<Vec<Vehicle>, VehicleError>;

    /// Insert a new vehicle. Fails if its id is already taken.
    fn create(&self, vehicle: Vehicle) -> Result<(), VehicleError>;

    /// Insert every vehicle or none of them.
    fn create_batch(&self, vehicles: Vec<Vehicle>) -> Result<(), VehicleError>;

    /// Remove a vehicle by id.
    fn delete(&self, id: VehicleId) -> Result<(), VehicleError>;

    /// Replace only the `max_speed` of a vehicle.
    fn update_speed(&self, id: VehicleId, max_speed: f64) -> Result<(), VehicleError>;

    /// Replace only the `fuel_type` of a vehicle.
    fn update_fuel_type(&self, id: VehicleId, fuel_type: &str) -> Result<(), VehicleError>;

    /// Every vehicle matching the predicate, taken from a single snapshot.
    ///
    /// An empty result is not an error here.
    fn find(&self, predicate: &dyn Fn(&Vehicle) -> bool) -> Result<Vec<Vehicle>, VehicleError>;

    /// Number of vehicles currently held.
    fn len(&self) -> Result<usize, VehicleError>;

    fn is_empty(&self) -> Result<bool, VehicleError> {
        Ok(self.len()? == 0)
    }
}
