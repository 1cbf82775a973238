use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::part_controller::PartController;
use crate::models::part::{CreatePartRequest, PartFilters, PartResponse, UpdatePartRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

pub fn create_part_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_parts))
        .route("/", post(create_part))
        .route("/:id", get(get_part))
        .route("/:id", put(update_part))
        .route("/:id", delete(delete_part))
}

async fn list_parts(
    State(state): State<AppState>,
    Query(filters): Query<PartFilters>,
) -> Result<Json<ApiResponse<Vec<PartResponse>>>, AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_part(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<PartResponse>>, AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.get(id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_part(
    State(state): State<AppState>,
    Json(request): Json<CreatePartRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PartResponse>>), AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(response, "Part created")),
    ))
}

async fn update_part(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePartRequest>,
) -> Result<Json<ApiResponse<PartResponse>>, AppError> {
    let controller = PartController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Part updated",
    )))
}

async fn delete_part(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = PartController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message_only("Part deleted")))
}
