//! Import model
//!
//! Stock-increasing inventory transactions stored in `PHIEUNHAPVTPT`.
//! Deleting an import reverses its stock increment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Import row in `PHIEUNHAPVTPT`, joined with the part name
#[derive(Debug, Clone, FromRow)]
pub struct ImportRecord {
    #[sqlx(rename = "MaPhieuNhap")]
    pub id: i64,
    #[sqlx(rename = "MaVTPT")]
    pub part_id: i64,
    #[sqlx(rename = "TenVTPT")]
    pub part_name: String,
    #[sqlx(rename = "SoLuong")]
    pub quantity: i64,
    #[sqlx(rename = "GhiChu")]
    pub note: Option<String>,
    #[sqlx(rename = "NgayNhap")]
    pub imported_at: DateTime<Utc>,
}

/// Request to record a stock import
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateImportRequest {
    pub part_id: i64,

    #[validate(range(min = 1))]
    pub quantity: i64,

    #[validate(length(max = 200))]
    pub note: Option<String>,
}

/// Import response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResponse {
    pub id: i64,
    pub part_id: i64,
    pub part_name: String,
    pub quantity: i64,
    pub note: Option<String>,
    pub imported_at: DateTime<Utc>,
}

impl From<ImportRecord> for ImportResponse {
    fn from(record: ImportRecord) -> Self {
        Self {
            id: record.id,
            part_id: record.part_id,
            part_name: record.part_name,
            quantity: record.quantity,
            note: record.note,
            imported_at: record.imported_at,
        }
    }
}
