use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::payment_controller::PaymentController;
use crate::models::payment::{CreatePaymentRequest, PaymentFilters, PaymentResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

pub fn create_payment_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments))
        .route("/", post(create_payment))
}

async fn list_payments(
    State(state): State<AppState>,
    Query(filters): Query<PaymentFilters>,
) -> Result<Json<ApiResponse<Vec<PaymentResponse>>>, AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_payment(
    State(state): State<AppState>,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PaymentResponse>>), AppError> {
    let controller = PaymentController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(response, "Payment recorded")),
    ))
}
