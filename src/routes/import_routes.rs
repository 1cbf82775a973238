use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::import_controller::ImportController;
use crate::models::import::{CreateImportRequest, ImportResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

pub fn create_import_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_imports))
        .route("/", post(create_import))
        .route("/:id", delete(delete_import))
}

async fn list_imports(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ImportResponse>>>, AppError> {
    let controller = ImportController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_import(
    State(state): State<AppState>,
    Json(request): Json<CreateImportRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ImportResponse>>), AppError> {
    let controller = ImportController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            "Import recorded and stock increased",
        )),
    ))
}

async fn delete_import(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ImportController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message_only(
        "Import deleted and stock restored",
    )))
}
