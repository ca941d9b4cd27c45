//! Rutas HTTP
//!
//! Un router por recurso; `create_router` los monta bajo `/api` junto con
//! el banner, el health check y las capas de CORS y trazas.

pub mod archive_routes;
pub mod distance_routes;
pub mod logbook_routes;
pub mod multi_transport_routes;
pub mod scheduling_routes;
pub mod shift_routes;
pub mod time_window_routes;
pub mod transport_routes;
pub mod user_routes;
pub mod vehicle_type_routes;

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::database;
use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/vehicle-types", vehicle_type_routes::create_vehicle_type_router())
        .nest("/users", user_routes::create_user_router())
        .nest("/transports", transport_routes::create_transport_router())
        .nest("/multi-transports", multi_transport_routes::create_multi_transport_router())
        .nest("/time-windows", time_window_routes::create_time_window_router())
        .nest("/shifts", shift_routes::create_shift_router())
        .nest("/logbook", logbook_routes::create_logbook_router())
        .nest("/distances", distance_routes::create_distance_router())
        .nest("/archived-transports", archive_routes::create_archive_router())
        .merge(scheduling_routes::create_scheduling_router());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api", api)
        .layer(cors_middleware(&state.config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Logistik scheduling backend running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match database::ping(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "database": "up" })),
        ),
        Err(e) => {
            tracing::error!("❌ Health check: base de datos no disponible: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "database": "down" })),
            )
        }
    }
}
