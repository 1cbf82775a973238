use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::models::report::{InventoryRow, ReportRangeQuery, RevenueRow};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/revenue", get(revenue_report))
        .route("/inventory", get(inventory_report))
}

async fn revenue_report(
    State(state): State<AppState>,
    Query(query): Query<ReportRangeQuery>,
) -> Result<Json<ApiResponse<Vec<RevenueRow>>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.revenue(query).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn inventory_report(
    State(state): State<AppState>,
    Query(query): Query<ReportRangeQuery>,
) -> Result<Json<ApiResponse<Vec<InventoryRow>>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.inventory(query).await?;
    Ok(Json(ApiResponse::success(response)))
}
