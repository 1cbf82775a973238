//! Report controller

use sqlx::SqlitePool;

use crate::models::report::{InventoryRow, ReportRangeQuery, RevenueRow};
use crate::repositories::report_repository::ReportRepository;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_date_range;

pub struct ReportController {
    repository: ReportRepository,
}

impl ReportController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ReportRepository::new(pool),
        }
    }

    fn validated_range(query: &ReportRangeQuery) -> AppResult<(String, String)> {
        validate_date_range(&query.from_date, &query.to_date).map_err(|_| {
            AppError::BadRequest(
                "fromDate and toDate must be YYYY-MM-DD with fromDate <= toDate".to_string(),
            )
        })?;
        Ok((query.from_date.clone(), query.to_date.clone()))
    }

    pub async fn revenue(&self, query: ReportRangeQuery) -> AppResult<Vec<RevenueRow>> {
        let (from, to) = Self::validated_range(&query)?;
        self.repository.revenue(&from, &to).await
    }

    pub async fn inventory(&self, query: ReportRangeQuery) -> AppResult<Vec<InventoryRow>> {
        let (from, to) = Self::validated_range(&query)?;
        self.repository.inventory(&from, &to).await
    }
}
