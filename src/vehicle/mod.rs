//! Vehicle - the record type held by every store.
//!
//! A `Vehicle` is identified by a caller-assigned integer `id`. Field names on
//! the wire follow the fixture files the registry is seeded from, which call
//! the fabrication year `year` and the capacity `passengers`.
//!
//! ## Example
//!
//! ```
//! use vehicle_store::Vehicle;
//!
//! let vehicle = Vehicle {
//!     id: 1,
//!     brand: "Toyota".into(),
//!     model: "Corolla".into(),
//!     fabrication_year: 2020,
//!     capacity: 5,
//!     ..Default::default()
//! };
//! assert!(vehicle.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::VehicleError;

/// Caller-assigned unique identifier of a vehicle.
pub type VehicleId = i64;

/// A single vehicle record.
///
/// Missing fields decode to their zero value, which [`Vehicle::validate`]
/// then rejects for the identity fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vehicle {
    pub id: VehicleId,
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    #[serde(rename = "year")]
    pub fabrication_year: i32,
    /// Passenger count.
    #[serde(rename = "passengers")]
    pub capacity: i32,
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    pub weight: f64,
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

impl Vehicle {
    /// Check the identity fields required before a vehicle may be stored.
    ///
    /// Fails with [`VehicleError::InvalidInput`] when `id` is zero or when
    /// `brand` or `model` is empty.
    pub fn validate(&self) -> Result<(), VehicleError> {
        if self.id == 0 {
            return Err(VehicleError::InvalidInput("id must be non-zero".into()));
        }
        if self.brand.is_empty() {
            return Err(VehicleError::InvalidInput("brand is required".into()));
        }
        if self.model.is_empty() {
            return Err(VehicleError::InvalidInput("model is required".into()));
        }
        Ok(())
    }
}
