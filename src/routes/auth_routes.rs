use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::models::account::{LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.login(request).await?;
    Ok(Json(ApiResponse::success_with_message(response, "Logged in")))
}
