//! Customer controller

use sqlx::SqlitePool;
use validator::Validate;

use crate::models::customer::{
    CreateCustomerRequest, CustomerFilters, CustomerResponse, UpdateCustomerRequest,
};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: CustomerFilters) -> AppResult<Vec<CustomerResponse>> {
        let customers = self.repository.list(filters.search).await?;
        Ok(customers.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<CustomerResponse> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Customer", id))?;
        Ok(customer.into())
    }

    pub async fn create(&self, request: CreateCustomerRequest) -> AppResult<CustomerResponse> {
        request.validate()?;
        let customer = self
            .repository
            .create(request.name.trim(), request.phone.trim(), request.address)
            .await?;
        Ok(customer.into())
    }

    pub async fn update(
        &self,
        id: i64,
        request: UpdateCustomerRequest,
    ) -> AppResult<CustomerResponse> {
        request.validate()?;
        self.repository
            .update(id, request.name, request.phone, request.address)
            .await?;
        // Re-read with the derived debt attached
        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Customer", id));
        }
        if self.repository.has_references(id).await? {
            return Err(AppError::Conflict(
                "Customer has vehicles, repairs or payments and cannot be deleted".to_string(),
            ));
        }
        self.repository.delete(id).await
    }
}
