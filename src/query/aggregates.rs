//! VehicleAggregates - Per-brand statistics over any VehicleStore.

use crate::error::VehicleError;
use crate::store::VehicleStore;

use super::{VehicleFilter, VehicleQueries};

/// Per-brand means available on every [`VehicleStore`].
///
/// Both aggregates read one snapshot and fail with [`VehicleError::NoMatch`]
/// when no vehicle has the brand.
pub trait VehicleAggregates: VehicleStore {
    /// Arithmetic mean of `max_speed` over the brand's vehicles.
    fn find_by_brand_average_speed(&self, brand: &str) -> Result<f64, VehicleError> {
        let vehicles = self.find_matching(&VehicleFilter::brand(brand))?;
        let total: f64 = vehicles.iter().map(|vehicle| vehicle.max_speed).sum();
        Ok(total / vehicles.len() as f64)
    }

    /// Mean of `capacity` over the brand's vehicles, truncated toward zero.
    fn find_by_brand_average_capacity(&self, brand: &str) -> Result<i32, VehicleError> {
        let vehicles = self.find_matching(&VehicleFilter::brand(brand))?;
        let total: i64 = vehicles.iter().map(|vehicle| i64::from(vehicle.capacity)).sum();
        // Mean of i32 values always fits back into i32.
        Ok((total / vehicles.len() as i64) as i32)
    }
}

impl<S: VehicleStore + ?Sized> VehicleAggregates for S {}
