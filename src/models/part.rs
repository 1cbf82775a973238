//! Part model
//!
//! Parts inventory stored in `KHO`. `SoLuongTon` (on-hand quantity) is only
//! adjusted through imports and repair-detail consumption, never edited
//! directly.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Part row in `KHO`
#[derive(Debug, Clone, FromRow)]
pub struct Part {
    #[sqlx(rename = "MaVTPT")]
    pub id: i64,
    #[sqlx(rename = "TenVTPT")]
    pub name: String,
    #[sqlx(rename = "DonGia")]
    pub price: i64,
    #[sqlx(rename = "SoLuongTon")]
    pub stock: i64,
}

/// Request to create a part
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePartRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(range(min = 0))]
    pub price: i64,

    /// Initial on-hand quantity
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i64,
}

/// Request to update a part's catalog data (stock moves via imports only)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePartRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    pub price: Option<i64>,
}

/// Search filter for part listings
#[derive(Debug, Deserialize)]
pub struct PartFilters {
    pub search: Option<String>,
}

/// Part response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartResponse {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub stock: i64,
}

impl From<Part> for PartResponse {
    fn from(part: Part) -> Self {
        Self {
            id: part.id,
            name: part.name,
            price: part.price,
            stock: part.stock,
        }
    }
}
