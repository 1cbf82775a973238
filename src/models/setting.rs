//! Settings model
//!
//! Operator-configurable limits stored as key/value rows in `THAMSO`.
//! Missing rows fall back to built-in defaults.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Setting row in `THAMSO`
#[derive(Debug, Clone, FromRow)]
pub struct Setting {
    #[sqlx(rename = "MaThamSo")]
    pub key: String,
    #[sqlx(rename = "TenThamSo")]
    pub name: String,
    #[sqlx(rename = "GiaTri")]
    pub value: i64,
    #[sqlx(rename = "GhiChu")]
    pub note: Option<String>,
}

/// The four admission-checked resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitKind {
    /// Vehicles received today (calendar-day scope)
    Vehicle,
    /// Brand catalog size (all-time)
    Brand,
    /// Part catalog size (all-time)
    Part,
    /// Service catalog size (all-time)
    Service,
}

impl LimitKind {
    pub const ALL: [LimitKind; 4] = [
        LimitKind::Vehicle,
        LimitKind::Brand,
        LimitKind::Part,
        LimitKind::Service,
    ];

    /// Key of the corresponding `THAMSO` row
    pub fn setting_key(&self) -> &'static str {
        match self {
            LimitKind::Vehicle => "SoXeToiDa",
            LimitKind::Brand => "SoHieuXeToiDa",
            LimitKind::Part => "SoLoaiVatTuToiDa",
            LimitKind::Service => "SoLoaiTienCongToiDa",
        }
    }

    /// Display name of the `THAMSO` row
    pub fn setting_name(&self) -> &'static str {
        match self {
            LimitKind::Vehicle => "Số xe sửa chữa tối đa trong ngày",
            LimitKind::Brand => "Số hiệu xe tối đa",
            LimitKind::Part => "Số loại vật tư phụ tùng tối đa",
            LimitKind::Service => "Số loại tiền công tối đa",
        }
    }

    /// Limit applied when no setting row exists
    pub fn default_limit(&self) -> i64 {
        match self {
            LimitKind::Vehicle => 30,
            LimitKind::Brand => 10,
            LimitKind::Part => 200,
            LimitKind::Service => 100,
        }
    }

    /// Error code surfaced when the limit rejects a creation
    pub fn error_code(&self) -> &'static str {
        match self {
            LimitKind::Vehicle => "VEHICLE_LIMIT_EXCEEDED",
            LimitKind::Brand => "BRAND_LIMIT_EXCEEDED",
            LimitKind::Part => "PART_LIMIT_EXCEEDED",
            LimitKind::Service => "SERVICE_LIMIT_EXCEEDED",
        }
    }

    /// Resource name used in limit listings
    pub fn resource_name(&self) -> &'static str {
        match self {
            LimitKind::Vehicle => "vehicles",
            LimitKind::Brand => "brands",
            LimitKind::Part => "parts",
            LimitKind::Service => "services",
        }
    }

    /// Human message for a rejected creation
    pub fn limit_message(&self, limit: i64) -> String {
        match self {
            LimitKind::Vehicle => {
                format!("The garage already received {} vehicles today", limit)
            }
            LimitKind::Brand => format!("The brand catalog is limited to {} entries", limit),
            LimitKind::Part => format!("The part catalog is limited to {} entries", limit),
            LimitKind::Service => {
                format!("The service catalog is limited to {} entries", limit)
            }
        }
    }
}

/// Current usage versus configured limit for one resource kind
#[derive(Debug, Serialize)]
pub struct LimitUsage {
    pub resource: &'static str,
    pub current: i64,
    pub limit: i64,
}

/// Settings response (wire names follow the admin UI)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub max_cars: i64,
    pub max_brands: i64,
    pub max_parts: i64,
    pub max_labors: i64,
}

/// Settings update; omitted fields keep their current value
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[validate(range(min = 0))]
    pub max_cars: Option<i64>,

    #[validate(range(min = 0))]
    pub max_brands: Option<i64>,

    #[validate(range(min = 0))]
    pub max_parts: Option<i64>,

    #[validate(range(min = 0))]
    pub max_labors: Option<i64>,
}

impl UpdateSettingsRequest {
    /// Pair each provided value with its limit kind
    pub fn changes(&self) -> Vec<(LimitKind, i64)> {
        let mut changes = Vec::new();
        if let Some(value) = self.max_cars {
            changes.push((LimitKind::Vehicle, value));
        }
        if let Some(value) = self.max_brands {
            changes.push((LimitKind::Brand, value));
        }
        if let Some(value) = self.max_parts {
            changes.push((LimitKind::Part, value));
        }
        if let Some(value) = self.max_labors {
            changes.push((LimitKind::Service, value));
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        assert_eq!(LimitKind::Vehicle.default_limit(), 30);
        assert_eq!(LimitKind::Brand.default_limit(), 10);
        assert_eq!(LimitKind::Part.default_limit(), 200);
        assert_eq!(LimitKind::Service.default_limit(), 100);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(LimitKind::Vehicle.error_code(), "VEHICLE_LIMIT_EXCEEDED");
        assert_eq!(LimitKind::Brand.error_code(), "BRAND_LIMIT_EXCEEDED");
        assert_eq!(LimitKind::Part.error_code(), "PART_LIMIT_EXCEEDED");
        assert_eq!(LimitKind::Service.error_code(), "SERVICE_LIMIT_EXCEEDED");
    }

    #[test]
    fn test_changes_maps_only_provided_fields() {
        let request = UpdateSettingsRequest {
            max_cars: Some(50),
            max_brands: None,
            max_parts: None,
            max_labors: Some(120),
        };
        let changes = request.changes();
        assert_eq!(changes.len(), 2);
        assert!(changes.contains(&(LimitKind::Vehicle, 50)));
        assert!(changes.contains(&(LimitKind::Service, 120)));
    }
}
