use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::repair_controller::RepairController;
use crate::models::repair::{CreateRepairRequest, RepairResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

pub fn create_repair_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_repairs))
        .route("/", post(create_repair))
        .route("/:id", get(get_repair))
        .route("/:id", delete(delete_repair))
}

async fn list_repairs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RepairResponse>>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_repair(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<RepairResponse>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    let response = controller.get(id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_repair(
    State(state): State<AppState>,
    Json(request): Json<CreateRepairRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RepairResponse>>), AppError> {
    let controller = RepairController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            "Repair order created",
        )),
    ))
}

async fn delete_repair(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = RepairController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message_only(
        "Repair order deleted and stock restored",
    )))
}
