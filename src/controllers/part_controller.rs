//! Part controller
//!
//! Creation is gated by the part-catalog admission check, inside the same
//! transaction as the insert.

use sqlx::SqlitePool;
use validator::Validate;

use crate::models::part::{CreatePartRequest, PartFilters, PartResponse, UpdatePartRequest};
use crate::models::setting::LimitKind;
use crate::repositories::limit_repository::LimitRepository;
use crate::repositories::part_repository::PartRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError, AppResult};

pub struct PartController {
    pool: SqlitePool,
    repository: PartRepository,
}

impl PartController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: PartRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn list(&self, filters: PartFilters) -> AppResult<Vec<PartResponse>> {
        let parts = self.repository.list(filters.search).await?;
        Ok(parts.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<PartResponse> {
        let part = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Part", id))?;
        Ok(part.into())
    }

    pub async fn create(&self, request: CreatePartRequest) -> AppResult<PartResponse> {
        request.validate()?;
        let name = request.name.trim().to_string();

        if self.repository.name_exists(&name).await? {
            return Err(conflict_error("Part", "name", &name));
        }

        let mut tx = self.pool.begin().await?;
        LimitRepository::check(&mut *tx, LimitKind::Part).await?;
        let part = PartRepository::create(&mut *tx, &name, request.price, request.stock).await?;
        tx.commit().await?;

        Ok(part.into())
    }

    pub async fn update(&self, id: i64, request: UpdatePartRequest) -> AppResult<PartResponse> {
        request.validate()?;
        let part = self.repository.update(id, request.name, request.price).await?;
        Ok(part.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Part", id));
        }
        if self.repository.is_referenced(id).await? {
            return Err(AppError::Conflict(
                "Part is referenced by repair details and cannot be deleted".to_string(),
            ));
        }
        self.repository.delete(id).await
    }
}
