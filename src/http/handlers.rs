//! Route handlers: decode the request, call one store operation, encode the result.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::error::ApiError;
use crate::query::{VehicleAggregates, VehicleQueries};
use crate::store::VehicleStore;
use crate::vehicle::{Vehicle, VehicleId};

type ApiResult = Result<Response, ApiError>;

fn success<T: Serialize>(data: T) -> Response {
    (
        StatusCode::OK,
        Json(json!({ "message": "success", "data": data })),
    )
        .into_response()
}

fn message(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn parse_id(raw: &str) -> Result<VehicleId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest("invalid ID".into()))
}

fn parse_year(raw: &str) -> Result<i32, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid year: {}", raw)))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(format!("invalid JSON: {}", rejection.body_text())))
}

fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    query
        .map(|Query(value)| value)
        .map_err(|rejection| ApiError::BadRequest(format!("invalid query: {}", rejection.body_text())))
}

#[derive(Debug, Deserialize)]
pub struct SpeedUpdate {
    pub max_speed: f64,
}

#[derive(Debug, Deserialize)]
pub struct FuelTypeUpdate {
    pub fuel_type: String,
}

#[derive(Debug, Deserialize)]
pub struct DimensionsQuery {
    pub length_min: f64,
    pub length_max: f64,
    pub width_min: f64,
    pub width_max: f64,
}

#[derive(Debug, Deserialize)]
pub struct WeightQuery {
    pub min: f64,
    pub max: f64,
}

/// `GET /vehicles`
pub async fn list_vehicles<S: VehicleStore>(State(store): State<Arc<S>>) -> ApiResult {
    Ok(success(store.find_all()?))
}

/// `POST /vehicles`
pub async fn create_vehicle<S: VehicleStore>(
    State(store): State<Arc<S>>,
    body: Result<Json<Vehicle>, JsonRejection>,
) -> ApiResult {
    let vehicle = json_body(body)?;
    store.create(vehicle)?;
    Ok(message(StatusCode::CREATED, "vehicle created successfully"))
}

/// `POST /vehicles/batch`
pub async fn create_batch<S: VehicleStore>(
    State(store): State<Arc<S>>,
    body: Result<Json<Vec<Vehicle>>, JsonRejection>,
) -> ApiResult {
    let vehicles = json_body(body)?;
    store.create_batch(vehicles)?;
    Ok(message(StatusCode::CREATED, "vehicles created successfully"))
}

/// `GET /vehicles/id/:id`
pub async fn get_by_id<S: VehicleStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> ApiResult {
    Ok(success(store.find_by_id(parse_id(&id)?)?))
}

/// `DELETE /vehicles/:id`
pub async fn delete_vehicle<S: VehicleStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> ApiResult {
    store.delete(parse_id(&id)?)?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// `PUT /vehicles/:id/update_speed`
pub async fn update_speed<S: VehicleStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    body: Result<Json<SpeedUpdate>, JsonRejection>,
) -> ApiResult {
    let id = parse_id(&id)?;
    let update = json_body(body)?;
    store.update_speed(id, update.max_speed)?;
    Ok(message(StatusCode::OK, "max speed updated successfully"))
}

/// `PUT /vehicles/:id/update_fuel`
pub async fn update_fuel_type<S: VehicleStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
    body: Result<Json<FuelTypeUpdate>, JsonRejection>,
) -> ApiResult {
    let id = parse_id(&id)?;
    let update = json_body(body)?;
    store.update_fuel_type(id, &update.fuel_type)?;
    Ok(message(StatusCode::OK, "fuel type updated successfully"))
}

/// `GET /vehicles/color/:color/year/:year`
pub async fn by_color_and_year<S: VehicleStore>(
    State(store): State<Arc<S>>,
    Path((color, year)): Path<(String, String)>,
) -> ApiResult {
    let year = parse_year(&year)?;
    Ok(success(store.find_by_color_and_year(&color, year)?))
}

/// `GET /vehicles/color/:color`
pub async fn by_color<S: VehicleStore>(
    State(store): State<Arc<S>>,
    Path(color): Path<String>,
) -> ApiResult {
    Ok(success(store.find_by_color(&color)?))
}

/// `GET /vehicles/fuel_type/:type`
pub async fn by_fuel_type<S: VehicleStore>(
    State(store): State<Arc<S>>,
    Path(fuel_type): Path<String>,
) -> ApiResult {
    Ok(success(store.find_by_fuel_type(&fuel_type)?))
}

/// `GET /vehicles/transmission/:type`
pub async fn by_transmission<S: VehicleStore>(
    State(store): State<Arc<S>>,
    Path(transmission): Path<String>,
) -> ApiResult {
    Ok(success(store.find_by_transmission_type(&transmission)?))
}

/// `GET /vehicles/brand/:brand/between/:start_year/:end_year`
pub async fn by_brand_between_years<S: VehicleStore>(
    State(store): State<Arc<S>>,
    Path((brand, start_year, end_year)): Path<(String, String, String)>,
) -> ApiResult {
    let start_year = parse_year(&start_year)?;
    let end_year = parse_year(&end_year)?;
    Ok(success(store.find_by_brand_and_between_year(
        &brand, start_year, end_year,
    )?))
}

/// `GET /vehicles/dimensions?length_min=..&length_max=..&width_min=..&width_max=..`
pub async fn by_dimensions<S: VehicleStore>(
    State(store): State<Arc<S>>,
    query: Result<Query<DimensionsQuery>, QueryRejection>,
) -> ApiResult {
    let q = query_params(query)?;
    Ok(success(store.find_by_dimensions(
        q.length_min,
        q.length_max,
        q.width_min,
        q.width_max,
    )?))
}

/// `GET /vehicles/weight?min=..&max=..`
pub async fn by_weight<S: VehicleStore>(
    State(store): State<Arc<S>>,
    query: Result<Query<WeightQuery>, QueryRejection>,
) -> ApiResult {
    let q = query_params(query)?;
    Ok(success(store.find_by_weight(q.min, q.max)?))
}

/// `GET /vehicles/avarage_speed/brand/:brand`
pub async fn average_speed<S: VehicleStore>(
    State(store): State<Arc<S>>,
    Path(brand): Path<String>,
) -> ApiResult {
    Ok(success(store.find_by_brand_average_speed(&brand)?))
}

/// `GET /vehicles/avarage_capacity/brand/:brand`
pub async fn average_capacity<S: VehicleStore>(
    State(store): State<Arc<S>>,
    Path(brand): Path<String>,
) -> ApiResult {
    Ok(success(store.find_by_brand_average_capacity(&brand)?))
}
