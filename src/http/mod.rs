//! HTTP transport - REST routes over a vehicle store.
//!
//! Requires the `http` feature. Uses axum for routing. Handlers are thin:
//! each decodes its input, calls exactly one store, query or aggregate
//! operation, and encodes the result. Failures map to status codes in
//! [`ApiError`].
//!
//! ## Routes
//!
//! - `GET /vehicles`, `POST /vehicles`, `POST /vehicles/batch`
//! - `GET /vehicles/id/:id`, `DELETE /vehicles/:id`
//! - `PUT /vehicles/:id/update_speed`, `PUT /vehicles/:id/update_fuel`
//! - `GET /vehicles/color/:color/year/:year`, `GET /vehicles/color/:color`
//! - `GET /vehicles/fuel_type/:type`, `GET /vehicles/transmission/:type`
//! - `GET /vehicles/brand/:brand/between/:start_year/:end_year`
//! - `GET /vehicles/dimensions`, `GET /vehicles/weight` (query parameters)
//! - `GET /vehicles/avarage_speed/brand/:brand`, `GET /vehicles/avarage_capacity/brand/:brand`
//!
//! The `avarage_` spelling is kept so existing clients keep working.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vehicle_store::{http, InMemoryVehicleStore};
//!
//! let store = Arc::new(InMemoryVehicleStore::new());
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(store.clone());
//!
//! // Or serve directly until Ctrl-C / SIGTERM
//! http::serve(store, "0.0.0.0:8080").await?;
//! ```

mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::store::VehicleStore;

pub use error::ApiError;

/// Build an axum `Router` serving the vehicle routes from the given store.
pub fn router<S: VehicleStore + 'static>(store: Arc<S>) -> Router {
    Router::new()
        .route(
            "/vehicles",
            get(handlers::list_vehicles::<S>).post(handlers::create_vehicle::<S>),
        )
        .route("/vehicles/batch", post(handlers::create_batch::<S>))
        .route("/vehicles/id/:id", get(handlers::get_by_id::<S>))
        .route("/vehicles/:id", delete(handlers::delete_vehicle::<S>))
        .route("/vehicles/:id/update_speed", put(handlers::update_speed::<S>))
        .route("/vehicles/:id/update_fuel", put(handlers::update_fuel_type::<S>))
        .route(
            "/vehicles/color/:color/year/:year",
            get(handlers::by_color_and_year::<S>),
        )
        .route("/vehicles/color/:color", get(handlers::by_color::<S>))
        .route("/vehicles/fuel_type/:type", get(handlers::by_fuel_type::<S>))
        .route(
            "/vehicles/transmission/:type",
            get(handlers::by_transmission::<S>),
        )
        .route(
            "/vehicles/brand/:brand/between/:start_year/:end_year",
            get(handlers::by_brand_between_years::<S>),
        )
        .route("/vehicles/dimensions", get(handlers::by_dimensions::<S>))
        .route("/vehicles/weight", get(handlers::by_weight::<S>))
        .route(
            "/vehicles/avarage_speed/brand/:brand",
            get(handlers::average_speed::<S>),
        )
        .route(
            "/vehicles/avarage_capacity/brand/:brand",
            get(handlers::average_capacity::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve the store over HTTP at `addr` until Ctrl-C or SIGTERM.
pub async fn serve<S: VehicleStore + 'static>(
    store: Arc<S>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "vehicle server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    #[cfg(not(unix))]
    ctrl_c.await;

    tracing::info!("shutdown signal received");
}
