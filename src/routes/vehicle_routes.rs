use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::models::brand::BrandResponse;
use crate::models::vehicle::{
    CreateVehicleRequest, UpdateVehicleStatusRequest, VehicleFilters, VehicleResponse,
};
use crate::repositories::brand_repository::BrandRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/", post(create_vehicle))
        .route("/:plate", get(get_vehicle))
        .route("/:plate/status", patch(update_vehicle_status))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<ApiResponse<Vec<VehicleResponse>>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get(&plate).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VehicleResponse>>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.intake(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            "Vehicle received",
        )),
    ))
}

async fn update_vehicle_status(
    State(state): State<AppState>,
    Path(plate): Path<String>,
    Json(request): Json<UpdateVehicleStatusRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update_status(&plate, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Vehicle status updated",
    )))
}

/// Brand catalog read used by the intake UI
pub async fn list_brands(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BrandResponse>>>, AppError> {
    let brands = BrandRepository::new(state.pool.clone()).list().await?;
    Ok(Json(ApiResponse::success(
        brands.into_iter().map(Into::into).collect(),
    )))
}
