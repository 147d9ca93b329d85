//! Stores - Keyed ownership of the vehicle collection.
//!
//! A store enforces the two write invariants of the registry: ids are unique
//! among the vehicles currently held, and a batch insert lands completely or
//! not at all. Reads return clones, so callers never alias stored records.
//!
//! ## Example
//!
//! ```
//! use vehicle_store::{InMemoryVehicleStore, Vehicle, VehicleError, VehicleStore};
//!
//! let store = InMemoryVehicleStore::new();
//! let vehicle = Vehicle {
//!     id: 1,
//!     brand: "Toyota".into(),
//!     model: "Corolla".into(),
//!     ..Default::default()
//! };
//!
//! store.create(vehicle.clone()).unwrap();
//! assert_eq!(store.create(vehicle), Err(VehicleError::AlreadyExists(1)));
//! assert_eq!(store.find_by_id(1).unwrap().len(), 1);
//! ```

mod in_memory;
mod store;

pub use in_memory::InMemoryVehicleStore;
pub use store::VehicleStore;
