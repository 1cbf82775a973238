//! Report models
//!
//! Read-only aggregation rows for the revenue and inventory reports.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Date-range query for the report endpoints
#[derive(Debug, Deserialize)]
pub struct ReportRangeQuery {
    #[serde(rename = "fromDate")]
    pub from_date: String,
    #[serde(rename = "toDate")]
    pub to_date: String,
}

/// One revenue row, grouped per calendar day
#[derive(Debug, FromRow, Serialize)]
pub struct RevenueRow {
    #[sqlx(rename = "Ngay")]
    #[serde(rename = "date")]
    pub date: String,
    #[sqlx(rename = "SoLuotXe")]
    #[serde(rename = "CarsRepaired")]
    pub cars_repaired: i64,
    #[sqlx(rename = "TongTienCong")]
    #[serde(rename = "TotalLabor")]
    pub total_labor: i64,
    #[sqlx(rename = "TongTienVatTu")]
    #[serde(rename = "TotalParts")]
    pub total_parts: i64,
    #[sqlx(rename = "TongDoanhThu")]
    #[serde(rename = "TotalRevenue")]
    pub total_revenue: i64,
}

/// One inventory row per part
///
/// The beginning balance is derived backwards from the current snapshot:
/// `beginning = current + consumed - imported`.
#[derive(Debug, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    #[sqlx(rename = "MaVTPT")]
    pub part_id: i64,
    #[sqlx(rename = "TenVTPT")]
    pub part_name: String,
    #[sqlx(rename = "TonDau")]
    pub beginning: i64,
    #[sqlx(rename = "NhapTrongKy")]
    pub imported: i64,
    #[sqlx(rename = "XuatTrongKy")]
    pub consumed: i64,
    #[sqlx(rename = "TonCuoi")]
    pub ending: i64,
}
