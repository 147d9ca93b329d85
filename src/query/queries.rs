//! VehicleQueries - Filter queries over any VehicleStore.

use crate::error::VehicleError;
use crate::store::VehicleStore;
use crate::vehicle::Vehicle;

use super::VehicleFilter;

/// Filter queries available on every [`VehicleStore`].
///
/// Each query is a full scan of one store snapshot. Result order is
/// unspecified. An empty result fails with [`VehicleError::NoMatch`].
pub trait VehicleQueries: VehicleStore {
    /// Run an arbitrary filter.
    fn find_matching(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>, VehicleError> {
        let found = self.find(&|vehicle| filter.matches(vehicle))?;
        if found.is_empty() {
            return Err(VehicleError::NoMatch);
        }
        Ok(found)
    }

    fn find_by_color_and_year(&self, color: &str, year: i32) -> Result<Vec<Vehicle>, VehicleError> {
        self.find_matching(&VehicleFilter::color(color).and(VehicleFilter::year(year)))
    }

    fn find_by_fuel_type(&self, fuel_type: &str) -> Result<Vec<Vehicle>, VehicleError> {
        self.find_matching(&VehicleFilter::fuel_type(fuel_type))
    }

    fn find_by_transmission_type(&self, transmission: &str) -> Result<Vec<Vehicle>, VehicleError> {
        self.find_matching(&VehicleFilter::transmission(transmission))
    }

    fn find_by_color(&self, color: &str) -> Result<Vec<Vehicle>, VehicleError> {
        self.find_matching(&VehicleFilter::color(color))
    }

    /// Vehicles of `brand` built in `start_year..=end_year`.
    fn find_by_brand_and_between_year(
        &self,
        brand: &str,
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<Vehicle>, VehicleError> {
        self.find_matching(
            &VehicleFilter::brand(brand).and(VehicleFilter::year_between(start_year, end_year)),
        )
    }

    /// Vehicles whose length and width both fall in their inclusive ranges.
    fn find_by_dimensions(
        &self,
        length_min: f64,
        length_max: f64,
        width_min: f64,
        width_max: f64,
    ) -> Result<Vec<Vehicle>, VehicleError> {
        self.find_matching(
            &VehicleFilter::length_between(length_min, length_max)
                .and(VehicleFilter::width_between(width_min, width_max)),
        )
    }

    fn find_by_weight(&self, min: f64, max: f64) -> Result<Vec<Vehicle>, VehicleError> {
        self.find_matching(&VehicleFilter::weight_between(min, max))
    }
}

impl<S: VehicleStore + ?Sized> VehicleQueries for S {}
