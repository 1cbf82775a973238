//! Repair order model
//!
//! Repair headers in `PHIEUSUACHUA` with detail lines in
//! `CHITIETPHIEUSUACHUA`. A detail line references either a service or a
//! part; the request layer makes that either-or structural before any row
//! is written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::errors::{AppError, AppResult};

/// Repair header row in `PHIEUSUACHUA`, joined with the customer name
#[derive(Debug, Clone, FromRow)]
pub struct Repair {
    #[sqlx(rename = "MaPhieuSC")]
    pub id: i64,
    #[sqlx(rename = "BienSo")]
    pub plate: String,
    #[sqlx(rename = "MaKH")]
    pub customer_id: i64,
    #[sqlx(rename = "TenKH")]
    pub customer_name: String,
    #[sqlx(rename = "GhiChu")]
    pub notes: Option<String>,
    #[sqlx(rename = "TienCong")]
    pub labor_cost: i64,
    #[sqlx(rename = "TienVatTu")]
    pub parts_cost: i64,
    #[sqlx(rename = "TongTien")]
    pub total_cost: i64,
    #[sqlx(rename = "NgaySuaChua")]
    pub repaired_at: DateTime<Utc>,
}

/// Repair detail row, joined with the referenced service/part name
#[derive(Debug, Clone, FromRow)]
pub struct RepairDetail {
    #[sqlx(rename = "MaCT")]
    pub id: i64,
    #[sqlx(rename = "MaPhieuSC")]
    pub repair_id: i64,
    #[sqlx(rename = "MaTC")]
    pub service_id: Option<i64>,
    #[sqlx(rename = "MaVTPT")]
    pub part_id: Option<i64>,
    #[sqlx(rename = "TenCT")]
    pub name: String,
    #[sqlx(rename = "SoLuong")]
    pub quantity: i64,
    #[sqlx(rename = "DonGia")]
    pub unit_price: i64,
}

/// One requested line: either a service or a part with a quantity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepairLine {
    Service { service_id: i64 },
    Part { part_id: i64, quantity: i64 },
}

/// Wire shape of a requested detail line
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairDetailRequest {
    pub service_id: Option<i64>,
    pub part_id: Option<i64>,
    pub quantity: Option<i64>,
}

impl RepairDetailRequest {
    /// Enforce the service-XOR-part shape before anything touches the database
    pub fn into_line(self) -> AppResult<RepairLine> {
        match (self.service_id, self.part_id) {
            (Some(service_id), None) => Ok(RepairLine::Service { service_id }),
            (None, Some(part_id)) => {
                let quantity = self.quantity.unwrap_or(1);
                if quantity <= 0 {
                    return Err(AppError::BadRequest(
                        "Part quantity must be a positive number".to_string(),
                    ));
                }
                Ok(RepairLine::Part { part_id, quantity })
            }
            (Some(_), Some(_)) => Err(AppError::BadRequest(
                "A repair detail references either a service or a part, not both".to_string(),
            )),
            (None, None) => Err(AppError::BadRequest(
                "A repair detail must reference a service or a part".to_string(),
            )),
        }
    }
}

/// Request to create a repair order with its detail lines
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRepairRequest {
    /// License plate of the vehicle under repair
    #[validate(length(min = 1))]
    pub vehicle_id: String,

    #[validate(length(max = 500))]
    pub notes: Option<String>,

    #[serde(default)]
    pub repair_details: Vec<RepairDetailRequest>,
}

/// Repair detail response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairDetailResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_id: Option<i64>,
    pub name: String,
    pub quantity: i64,
    pub unit_price: i64,
    pub line_total: i64,
}

impl From<RepairDetail> for RepairDetailResponse {
    fn from(detail: RepairDetail) -> Self {
        Self {
            id: detail.id,
            service_id: detail.service_id,
            part_id: detail.part_id,
            name: detail.name,
            quantity: detail.quantity,
            unit_price: detail.unit_price,
            line_total: detail.quantity * detail.unit_price,
        }
    }
}

/// Repair order response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairResponse {
    pub id: i64,
    pub vehicle_id: String,
    pub customer_id: i64,
    pub customer_name: String,
    pub notes: Option<String>,
    pub labor_cost: i64,
    pub parts_cost: i64,
    pub total_cost: i64,
    pub repair_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<RepairDetailResponse>>,
}

impl RepairResponse {
    pub fn from_header(repair: Repair) -> Self {
        Self {
            id: repair.id,
            vehicle_id: repair.plate,
            customer_id: repair.customer_id,
            customer_name: repair.customer_name,
            notes: repair.notes,
            labor_cost: repair.labor_cost,
            parts_cost: repair.parts_cost,
            total_cost: repair.total_cost,
            repair_date: repair.repaired_at,
            details: None,
        }
    }

    pub fn with_details(repair: Repair, details: Vec<RepairDetail>) -> Self {
        let mut response = Self::from_header(repair);
        response.details = Some(details.into_iter().map(Into::into).collect());
        response
    }
}
