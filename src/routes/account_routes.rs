use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::account_controller::AccountController;
use crate::middleware::auth::{admin_only_middleware, auth_middleware};
use crate::models::account::{AccountResponse, CreateAccountRequest, UpdateAccountRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

/// Account management is restricted to authenticated admins
pub fn create_account_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_accounts))
        .route("/", post(create_account))
        .route("/:id", put(update_account))
        .route("/:id", delete(delete_account))
        .layer(middleware::from_fn(admin_only_middleware))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_accounts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AccountResponse>>>, AppError> {
    let controller = AccountController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AccountResponse>>), AppError> {
    let controller = AccountController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(response, "Account created")),
    ))
}

async fn update_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<Json<ApiResponse<AccountResponse>>, AppError> {
    let controller = AccountController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Account updated",
    )))
}

async fn delete_account(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = AccountController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message_only("Account deleted")))
}
