//! Service controller
//!
//! Creation is gated by the service-catalog admission check, inside the
//! same transaction as the insert.

use sqlx::SqlitePool;
use validator::Validate;

use crate::models::service::{CreateServiceRequest, ServiceResponse, UpdateServiceRequest};
use crate::models::setting::LimitKind;
use crate::repositories::limit_repository::LimitRepository;
use crate::repositories::service_repository::ServiceRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError, AppResult};

pub struct ServiceController {
    pool: SqlitePool,
    repository: ServiceRepository,
}

impl ServiceController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ServiceRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<ServiceResponse>> {
        let services = self.repository.list().await?;
        Ok(services.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: CreateServiceRequest) -> AppResult<ServiceResponse> {
        request.validate()?;
        let name = request.name.trim().to_string();

        if self.repository.name_exists(&name).await? {
            return Err(conflict_error("Service", "name", &name));
        }

        let mut tx = self.pool.begin().await?;
        LimitRepository::check(&mut *tx, LimitKind::Service).await?;
        let service = ServiceRepository::create(&mut *tx, &name, request.price).await?;
        tx.commit().await?;

        Ok(service.into())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateServiceRequest,
    ) -> AppResult<ServiceResponse> {
        request.validate()?;
        let service = self.repository.update(id, request.name, request.price).await?;
        Ok(service.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Service", id));
        }
        if self.repository.is_referenced(id).await? {
            return Err(AppError::Conflict(
                "Service is referenced by repair details and cannot be deleted".to_string(),
            ));
        }
        self.repository.delete(id).await
    }
}
