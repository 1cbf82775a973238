//! Route definitions
//!
//! One router per resource, assembled under `/api` with CORS and request
//! tracing layers.

pub mod account_routes;
pub mod auth_routes;
pub mod customer_routes;
pub mod import_routes;
pub mod part_routes;
pub mod payment_routes;
pub mod repair_routes;
pub mod report_routes;
pub mod service_routes;
pub mod setting_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Build the full application router
pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&state.config.cors_origins)
    };

    Router::new()
        .route("/api/health", get(health))
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/api/accounts", account_routes::create_account_router(state.clone()))
        .nest("/api/customers", customer_routes::create_customer_router())
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .route("/api/brands", get(vehicle_routes::list_brands))
        .nest("/api/repairs", repair_routes::create_repair_router())
        .nest("/api/parts", part_routes::create_part_router())
        .nest("/api/services", service_routes::create_service_router())
        .nest("/api/payments", payment_routes::create_payment_router())
        .nest("/api/imports", import_routes::create_import_router())
        .nest("/api/settings", setting_routes::create_setting_router())
        .route("/api/limits", get(setting_routes::get_limits))
        .nest("/api/reports", report_routes::create_report_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "data": { "status": "healthy" },
        "message": "Garage management API is running"
    }))
}
