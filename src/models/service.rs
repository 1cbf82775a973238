//! Service model
//!
//! Labor catalog entries stored in `TIENCONG`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Service row in `TIENCONG`
#[derive(Debug, Clone, FromRow)]
pub struct Service {
    #[sqlx(rename = "MaTC")]
    pub id: i64,
    #[sqlx(rename = "TenTC")]
    pub name: String,
    #[sqlx(rename = "DonGia")]
    pub price: i64,
}

/// Request to create a service
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(range(min = 0))]
    pub price: i64,
}

/// Request to update a service
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    pub price: Option<i64>,
}

/// Service response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            price: service.price,
        }
    }
}
