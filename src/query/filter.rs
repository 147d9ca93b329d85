//! VehicleFilter - Composable predicates over vehicle fields.

use std::ops::RangeInclusive;

use crate::vehicle::Vehicle;

/// A predicate over a single vehicle.
///
/// Text fields match exactly (case-sensitive). Numeric fields match an
/// inclusive range. Filters combine with [`and`](VehicleFilter::and), which
/// requires every part to match.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleFilter {
    Brand(String),
    Color(String),
    FuelType(String),
    Transmission(String),
    Year(RangeInclusive<i32>),
    Length(RangeInclusive<f64>),
    Width(RangeInclusive<f64>),
    Weight(RangeInclusive<f64>),
    /// Every inner filter must match. An empty list matches everything.
    All(Vec<VehicleFilter>),
}

impl VehicleFilter {
    pub fn brand(brand: impl Into<String>) -> Self {
        VehicleFilter::Brand(brand.into())
    }

    pub fn color(color: impl Into<String>) -> Self {
        VehicleFilter::Color(color.into())
    }

    pub fn fuel_type(fuel_type: impl Into<String>) -> Self {
        VehicleFilter::FuelType(fuel_type.into())
    }

    pub fn transmission(transmission: impl Into<String>) -> Self {
        VehicleFilter::Transmission(transmission.into())
    }

    /// Fabrication year in `start..=end`.
    pub fn year_between(start: i32, end: i32) -> Self {
        VehicleFilter::Year(start..=end)
    }

    pub fn year(year: i32) -> Self {
        Self::year_between(year, year)
    }

    pub fn length_between(min: f64, max: f64) -> Self {
        VehicleFilter::Length(min..=max)
    }

    pub fn width_between(min: f64, max: f64) -> Self {
        VehicleFilter::Width(min..=max)
    }

    pub fn weight_between(min: f64, max: f64) -> Self {
        VehicleFilter::Weight(min..=max)
    }

    /// Combine two filters; both must match.
    pub fn and(self, other: VehicleFilter) -> Self {
        match self {
            VehicleFilter::All(mut parts) => {
                parts.push(other);
                VehicleFilter::All(parts)
            }
            first => VehicleFilter::All(vec![first, other]),
        }
    }

    /// Whether the vehicle satisfies this filter.
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        match self {
            VehicleFilter::Brand(brand) => vehicle.brand == *brand,
            VehicleFilter::Color(color) => vehicle.color == *color,
            VehicleFilter::FuelType(fuel_type) => vehicle.fuel_type == *fuel_type,
            VehicleFilter::Transmission(transmission) => vehicle.transmission == *transmission,
            VehicleFilter::Year(range) => range.contains(&vehicle.fabrication_year),
            VehicleFilter::Length(range) => range.contains(&vehicle.length),
            VehicleFilter::Width(range) => range.contains(&vehicle.width),
            VehicleFilter::Weight(range) => range.contains(&vehicle.weight),
            VehicleFilter::All(parts) => parts.iter().all(|part| part.matches(vehicle)),
        }
    }
}
