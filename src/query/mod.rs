//! Queries - Filters and aggregates over the current store snapshot.
//!
//! Queries are extension traits with a blanket impl over every
//! [`VehicleStore`](crate::VehicleStore), so swapping the backend never
//! touches them. Nothing is indexed: each call scans the collection once
//! through `VehicleStore::find`.
//!
//! ## Example
//!
//! ```
//! use vehicle_store::{
//!     InMemoryVehicleStore, Vehicle, VehicleAggregates, VehicleError, VehicleQueries,
//!     VehicleStore,
//! };
//!
//! let store = InMemoryVehicleStore::new();
//! for (id, capacity) in [(1, 4), (2, 5)] {
//!     store
//!         .create(Vehicle {
//!             id,
//!             brand: "Toyota".into(),
//!             model: "Corolla".into(),
//!             color: "red".into(),
//!             fabrication_year: 2020,
//!             capacity,
//!             ..Default::default()
//!         })
//!         .unwrap();
//! }
//!
//! assert_eq!(store.find_by_color_and_year("red", 2020).unwrap().len(), 2);
//! assert_eq!(store.find_by_color("blue"), Err(VehicleError::NoMatch));
//! assert_eq!(store.find_by_brand_average_capacity("Toyota").unwrap(), 4);
//! ```

mod aggregates;
mod filter;
mod queries;

pub use aggregates::VehicleAggregates;
pub use filter::VehicleFilter;
pub use queries::VehicleQueries;
