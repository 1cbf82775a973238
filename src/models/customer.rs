//! Customer model
//!
//! Customers stored in `KHACHHANG`. Outstanding debt is not a column: it is
//! derived on read as the sum of repair totals minus the sum of payments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Customer row in `KHACHHANG`
#[derive(Debug, Clone, FromRow)]
pub struct Customer {
    #[sqlx(rename = "MaKH")]
    pub id: i64,
    #[sqlx(rename = "HoTen")]
    pub name: String,
    #[sqlx(rename = "DienThoai")]
    pub phone: String,
    #[sqlx(rename = "DiaChi")]
    pub address: Option<String>,
    #[sqlx(rename = "NgayTao")]
    pub created_at: DateTime<Utc>,
}

/// Customer row with the derived outstanding debt attached
#[derive(Debug, Clone, FromRow)]
pub struct CustomerWithDebt {
    #[sqlx(rename = "MaKH")]
    pub id: i64,
    #[sqlx(rename = "HoTen")]
    pub name: String,
    #[sqlx(rename = "DienThoai")]
    pub phone: String,
    #[sqlx(rename = "DiaChi")]
    pub address: Option<String>,
    #[sqlx(rename = "NgayTao")]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "TienNo")]
    pub debt: i64,
}

/// Request to create a customer
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: String,

    #[validate(length(max = 200))]
    pub address: Option<String>,
}

/// Request to update a customer
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_phone")]
    pub phone: Option<String>,

    #[validate(length(max = 200))]
    pub address: Option<String>,
}

/// Search filter for customer listings
#[derive(Debug, Deserialize)]
pub struct CustomerFilters {
    pub search: Option<String>,
}

/// Customer response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub debt: i64,
    pub created_at: DateTime<Utc>,
}

impl From<CustomerWithDebt> for CustomerResponse {
    fn from(customer: CustomerWithDebt) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
            address: customer.address,
            debt: customer.debt,
            created_at: customer.created_at,
        }
    }
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
            address: customer.address,
            debt: 0,
            created_at: customer.created_at,
        }
    }
}
