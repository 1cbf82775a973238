//! Account model
//!
//! Staff/admin accounts stored in `TAIKHOAN`. Passwords are kept as bcrypt
//! hashes; the main admin account (id 1) is protected from deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Staff,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Locked,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Locked => "locked",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(AccountStatus::Active),
            "locked" => Some(AccountStatus::Locked),
            _ => None,
        }
    }
}

/// Account row in `TAIKHOAN`
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    #[sqlx(rename = "MaTK")]
    pub id: i64,
    #[sqlx(rename = "TenHienThi")]
    pub display_name: String,
    #[sqlx(rename = "TenDangNhap")]
    pub username: String,
    #[sqlx(rename = "MatKhau")]
    pub password_hash: String,
    #[sqlx(rename = "VaiTro")]
    pub role: String,
    #[sqlx(rename = "TrangThai")]
    pub status: String,
    #[sqlx(rename = "NgayTao")]
    pub created_at: DateTime<Utc>,
}

/// Request to create an account
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    #[validate(length(min = 1, max = 100))]
    pub display_name: String,

    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    pub role: String,
}

/// Request to update an account
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    #[validate(length(min = 1, max = 100))]
    pub display_name: Option<String>,

    #[validate(length(min = 6, max = 100))]
    pub password: Option<String>,

    pub role: Option<String>,
    pub status: Option<String>,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// Account response (never exposes the password hash)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: i64,
    pub display_name: String,
    pub username: String,
    pub role: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            display_name: account.display_name,
            username: account.username,
            role: account.role,
            status: account.status,
            created_at: account.created_at,
        }
    }
}

/// Login response carrying the signed token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub account: AccountResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("staff"), Some(Role::Staff));
        assert_eq!(Role::parse("root"), None);
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(AccountStatus::parse("active"), Some(AccountStatus::Active));
        assert_eq!(AccountStatus::parse("locked"), Some(AccountStatus::Locked));
        assert_eq!(AccountStatus::parse("banned"), None);
    }
}
