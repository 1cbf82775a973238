use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};

use crate::controllers::customer_controller::CustomerController;
use crate::models::customer::{
    CreateCustomerRequest, CustomerFilters, CustomerResponse, UpdateCustomerRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers))
        .route("/", post(create_customer))
        .route("/:id", get(get_customer))
        .route("/:id", put(update_customer))
        .route("/:id", delete(delete_customer))
}

async fn list_customers(
    State(state): State<AppState>,
    Query(filters): Query<CustomerFilters>,
) -> Result<Json<ApiResponse<Vec<CustomerResponse>>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.get(id).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CustomerResponse>>), AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            response,
            "Customer created",
        )),
    ))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<ApiResponse<CustomerResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Customer updated",
    )))
}

async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message_only("Customer deleted")))
}
