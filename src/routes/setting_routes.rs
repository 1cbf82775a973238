use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::setting_controller::SettingController;
use crate::models::setting::{LimitUsage, SettingsResponse, UpdateSettingsRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

pub fn create_setting_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings))
        .route("/", put(update_settings))
}

async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SettingsResponse>>, AppError> {
    let controller = SettingController::new(state.pool.clone());
    let response = controller.get_settings().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<ApiResponse<SettingsResponse>>, AppError> {
    let controller = SettingController::new(state.pool.clone());
    let response = controller.update_settings(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Settings updated",
    )))
}

/// Current usage versus limit for every admission-checked resource
pub async fn get_limits(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<LimitUsage>>>, AppError> {
    let controller = SettingController::new(state.pool.clone());
    let response = controller.limits().await?;
    Ok(Json(ApiResponse::success(response)))
}
