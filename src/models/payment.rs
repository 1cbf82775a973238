//! Payment model
//!
//! Append-only payment receipts stored in `PHIEUTHUTIEN`. A payment reduces
//! the customer's derived outstanding debt; there is no reconciliation
//! against individual repair orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Payment row in `PHIEUTHUTIEN`, joined with the customer name
#[derive(Debug, Clone, FromRow)]
pub struct Payment {
    #[sqlx(rename = "MaPhieu")]
    pub id: i64,
    #[sqlx(rename = "MaKH")]
    pub customer_id: i64,
    #[sqlx(rename = "TenKH")]
    pub customer_name: String,
    #[sqlx(rename = "SoTien")]
    pub amount: i64,
    #[sqlx(rename = "GhiChu")]
    pub note: Option<String>,
    #[sqlx(rename = "NgayThu")]
    pub paid_at: DateTime<Utc>,
}

/// Request to record a payment
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub customer_id: i64,

    #[validate(range(min = 1))]
    pub amount: i64,

    #[validate(length(max = 200))]
    pub note: Option<String>,
}

/// Filter for payment listings
#[derive(Debug, Deserialize)]
pub struct PaymentFilters {
    #[serde(rename = "customerId")]
    pub customer_id: Option<i64>,
}

/// Payment response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub amount: i64,
    pub note: Option<String>,
    pub paid_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            customer_id: payment.customer_id,
            customer_name: payment.customer_name,
            amount: payment.amount,
            note: payment.note,
            paid_at: payment.paid_at,
        }
    }
}
