use vehicle_store::{VehicleAggregates, VehicleError, VehicleFilter, VehicleQueries, VehicleStore};

use crate::support::{fleet_store, sorted_ids, vehicle};

#[test]
fn color_and_year_returns_exact_subset() {
    let store = fleet_store();
    assert_eq!(sorted_ids(store.find_by_color_and_year("red", 2020).unwrap()), vec![1, 3]);
    assert_eq!(
        store.find_by_color_and_year("white", 2020).unwrap_err(),
        VehicleError::NoMatch
    );
}

#[test]
fn single_field_filters() {
    let store = fleet_store();
    assert_eq!(sorted_ids(store.find_by_fuel_type("diesel").unwrap()), vec![4]);
    assert_eq!(sorted_ids(store.find_by_transmission_type("manual").unwrap()), vec![1, 3, 4]);
    assert_eq!(sorted_ids(store.find_by_color("red").unwrap()), vec![1, 3]);
    assert_eq!(store.find_by_color("purple").unwrap_err(), VehicleError::NoMatch);
}

#[test]
fn text_filters_are_case_sensitive() {
    let store = fleet_store();
    assert_eq!(store.find_by_color("Red").unwrap_err(), VehicleError::NoMatch);
}

#[test]
fn brand_between_years_bounds_are_inclusive() {
    let store = fleet_store();
    assert_eq!(
        sorted_ids(store.find_by_brand_and_between_year("Toyota", 2017, 2020).unwrap()),
        vec![1, 2]
    );
    assert_eq!(
        sorted_ids(store.find_by_brand_and_between_year("Toyota", 2018, 2030).unwrap()),
        vec![1]
    );
    assert_eq!(
        store.find_by_brand_and_between_year("Toyota", 2021, 2017).unwrap_err(),
        VehicleError::NoMatch
    );
}

#[test]
fn dimensions_and_weight() {
    let store = fleet_store();
    assert_eq!(sorted_ids(store.find_by_dimensions(4.0, 5.0, 1.75, 1.95).unwrap()), vec![1, 2, 3]);
    assert_eq!(sorted_ids(store.find_by_dimensions(3.0, 4.0, 1.0, 2.0).unwrap()), vec![4]);
    assert_eq!(sorted_ids(store.find_by_weight(1200.0, 1500.0).unwrap()), vec![1, 2, 3]);
    assert_eq!(store.find_by_weight(2000.0, 3000.0).unwrap_err(), VehicleError::NoMatch);
}

#[test]
fn composed_filter() {
    let store = fleet_store();
    let filter = VehicleFilter::brand("Toyota")
        .and(VehicleFilter::fuel_type("hybrid"))
        .and(VehicleFilter::year_between(2015, 2018));

    assert_eq!(sorted_ids(store.find_matching(&filter).unwrap()), vec![2]);
}

#[test]
fn average_capacity_truncates_toward_zero() {
    let store = fleet_store();
    // Toyota capacities are [4, 5]: 4.5 truncates to 4.
    assert_eq!(store.find_by_brand_average_capacity("Toyota").unwrap(), 4);
    assert_eq!(store.find_by_brand_average_capacity("Fiat").unwrap(), 2);
}

#[test]
fn average_speed_is_arithmetic_mean() {
    let store = fleet_store();
    assert_eq!(store.find_by_brand_average_speed("Toyota").unwrap(), 180.0);
}

#[test]
fn aggregates_on_unknown_brand_fail() {
    let store = fleet_store();
    assert_eq!(
        store.find_by_brand_average_speed("Lada").unwrap_err(),
        VehicleError::NoMatch
    );
    assert_eq!(
        store.find_by_brand_average_capacity("Lada").unwrap_err(),
        VehicleError::NoMatch
    );
}

#[test]
fn aggregates_follow_mutations() {
    let store = fleet_store();
    store.create(vehicle(5, "Fiat", "red", 2015)).unwrap();
    // Fiat capacities [2, 5] -> 3; speeds [250, 180] -> 215
    assert_eq!(store.find_by_brand_average_capacity("Fiat").unwrap(), 3);
    assert_eq!(store.find_by_brand_average_speed("Fiat").unwrap(), 215.0);

    store.update_speed(5, 250.0).unwrap();
    assert_eq!(store.find_by_brand_average_speed("Fiat").unwrap(), 250.0);
}
