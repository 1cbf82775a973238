use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::service_controller::ServiceController;
use crate::models::service::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

pub fn create_service_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services))
        .route("/", post(create_service))
        .route("/:id", put(update_service))
        .route("/:id", delete(delete_service))
}

async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ServiceResponse>>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_service(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceResponse>>), AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(response, "Service created")),
    ))
}

async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<ApiResponse<ServiceResponse>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Service updated",
    )))
}

async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message_only("Service deleted")))
}
