use thiserror::Error;

use crate::vehicle::VehicleId;

/// Error type for store, query and aggregate operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VehicleError {
    /// A required identity field was missing or empty.
    #[error("invalid vehicle data: {0}")]
    InvalidInput(String),
    /// Another vehicle already holds this id.
    #[error("vehicle with id {0} already exists")]
    AlreadyExists(VehicleId),
    /// No vehicle holds this id.
    #[error("vehicle with id {0} not found")]
    NotFound(VehicleId),
    /// A filter or aggregate matched zero vehicles.
    #[error("no vehicles match the query")]
    NoMatch,
    /// The backing storage is unusable (e.g. the lock was poisoned).
    #[error("vehicle storage error: {0}")]
    Storage(String),
}
