//! Brand model
//!
//! Vehicle brands stored in `HIEUXE`, created on demand at vehicle intake.

use serde::Serialize;
use sqlx::FromRow;

/// Brand row in `HIEUXE`
#[derive(Debug, Clone, FromRow)]
pub struct Brand {
    #[sqlx(rename = "MaHieuXe")]
    pub id: i64,
    #[sqlx(rename = "TenHieuXe")]
    pub name: String,
}

/// Brand response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandResponse {
    pub id: i64,
    pub name: String,
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
        }
    }
}
