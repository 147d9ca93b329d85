//! vehicle_store - An in-memory vehicle registry.
//!
//! The core is a keyed store ([`VehicleStore`], [`InMemoryVehicleStore`]) that
//! enforces id uniqueness and all-or-nothing batch inserts, plus filter
//! queries ([`VehicleQueries`]) and per-brand aggregates ([`VehicleAggregates`])
//! that work against any store backend.
//!
//! Optional features:
//! - `http`: axum routes over a store (see [`http`]).
//! - `server`: the `vehicle-server` binary and its [`config`].

#[cfg(feature = "server")]
pub mod config;
mod error;
#[cfg(feature = "http")]
pub mod http;
mod loader;
mod query;
mod store;
mod vehicle;

pub use error::VehicleError;
pub use loader::{LoadError, VehicleJsonFile};
pub use query::{VehicleAggregates, VehicleFilter, VehicleQueries};
pub use store::{InMemoryVehicleStore, VehicleStore};
pub use vehicle::{Vehicle, VehicleId};
