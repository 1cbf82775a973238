//! Payment controller
//!
//! Payments are an append-only ledger. They reduce the customer's derived
//! debt on read; nothing is reconciled against individual repair orders.

use sqlx::SqlitePool;
use validator::Validate;

use crate::models::payment::{CreatePaymentRequest, PaymentFilters, PaymentResponse};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::payment_repository::PaymentRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct PaymentController {
    repository: PaymentRepository,
    customers: CustomerRepository,
}

impl PaymentController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: PaymentRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: PaymentFilters) -> AppResult<Vec<PaymentResponse>> {
        let payments = self.repository.list(filters.customer_id).await?;
        Ok(payments.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: CreatePaymentRequest) -> AppResult<PaymentResponse> {
        request.validate()?;

        if !self.customers.exists(request.customer_id).await? {
            return Err(not_found_error("Customer", request.customer_id));
        }

        let payment = self
            .repository
            .create(request.customer_id, request.amount, request.note)
            .await?;
        Ok(payment.into())
    }
}
