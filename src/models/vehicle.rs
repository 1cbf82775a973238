//! Vehicle model
//!
//! Vehicles stored in `XE`, keyed by license plate. The intake endpoint
//! keeps the original wire field names (`BienSo`, `TenHieuXe`, `MaKH`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Vehicle repair status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Waiting,
    Repairing,
    Completed,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Waiting => "waiting",
            VehicleStatus::Repairing => "repairing",
            VehicleStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "waiting" => Some(VehicleStatus::Waiting),
            "repairing" => Some(VehicleStatus::Repairing),
            "completed" => Some(VehicleStatus::Completed),
            _ => None,
        }
    }
}

/// Vehicle row in `XE`, joined with brand and owner names
#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
    #[sqlx(rename = "BienSo")]
    pub plate: String,
    #[sqlx(rename = "MaHieuXe")]
    pub brand_id: i64,
    #[sqlx(rename = "TenHieuXe")]
    pub brand_name: String,
    #[sqlx(rename = "MaKH")]
    pub customer_id: i64,
    #[sqlx(rename = "TenKH")]
    pub customer_name: String,
    #[sqlx(rename = "NgayTiepNhan")]
    pub received_at: DateTime<Utc>,
    #[sqlx(rename = "TinhTrang")]
    pub status: String,
}

/// Vehicle intake request (original wire field names)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[serde(rename = "BienSo")]
    #[validate(custom = "crate::utils::validation::validate_license_plate")]
    pub plate: String,

    #[serde(rename = "TenHieuXe")]
    #[validate(length(min = 1, max = 100))]
    pub brand_name: String,

    #[serde(rename = "MaKH")]
    pub customer_id: i64,
}

/// Request to update a vehicle's repair status
#[derive(Debug, Deserialize)]
pub struct UpdateVehicleStatusRequest {
    pub status: String,
}

/// Filters for vehicle listings
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub search: Option<String>,
    #[serde(rename = "customerId")]
    pub customer_id: Option<i64>,
}

/// Vehicle response (original wire field names)
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    #[serde(rename = "BienSo")]
    pub plate: String,
    #[serde(rename = "MaHieuXe")]
    pub brand_id: i64,
    #[serde(rename = "TenHieuXe")]
    pub brand_name: String,
    #[serde(rename = "MaKH")]
    pub customer_id: i64,
    #[serde(rename = "TenKH")]
    pub customer_name: String,
    #[serde(rename = "NgayTiepNhan")]
    pub received_at: DateTime<Utc>,
    #[serde(rename = "TinhTrang")]
    pub status: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            plate: vehicle.plate,
            brand_id: vehicle.brand_id,
            brand_name: vehicle.brand_name,
            customer_id: vehicle.customer_id,
            customer_name: vehicle.customer_name,
            received_at: vehicle.received_at,
            status: vehicle.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(VehicleStatus::parse("waiting"), Some(VehicleStatus::Waiting));
        assert_eq!(
            VehicleStatus::parse("repairing"),
            Some(VehicleStatus::Repairing)
        );
        assert_eq!(
            VehicleStatus::parse("completed"),
            Some(VehicleStatus::Completed)
        );
        assert_eq!(VehicleStatus::parse("scrapped"), None);
        assert_eq!(VehicleStatus::Waiting.as_str(), "waiting");
    }

    #[test]
    fn test_create_request_wire_names() {
        let request: CreateVehicleRequest = serde_json::from_value(serde_json::json!({
            "BienSo": "51A-1234",
            "TenHieuXe": "Toyota",
            "MaKH": 1
        }))
        .unwrap();
        assert_eq!(request.plate, "51A-1234");
        assert_eq!(request.brand_name, "Toyota");
        assert_eq!(request.customer_id, 1);
    }
}
