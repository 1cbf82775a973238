//! Admission check repository
//!
//! Compares live row counts against the configured limits. The vehicle
//! count is scoped to the current server-local calendar day; the other
//! kinds count all-time catalog size. Callers run the check inside the
//! same transaction as the insert it gates.

use sqlx::SqliteConnection;

use crate::models::setting::{LimitKind, LimitUsage};
use crate::repositories::setting_repository::SettingRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct LimitRepository;

impl LimitRepository {
    /// Live count for one limit kind
    pub async fn current_count(conn: &mut SqliteConnection, kind: LimitKind) -> AppResult<i64> {
        let sql = match kind {
            LimitKind::Vehicle => {
                "SELECT COUNT(*) FROM XE \
                 WHERE DATE(NgayTiepNhan, 'localtime') = DATE('now', 'localtime')"
            }
            LimitKind::Brand => "SELECT COUNT(*) FROM HIEUXE",
            LimitKind::Part => "SELECT COUNT(*) FROM KHO",
            LimitKind::Service => "SELECT COUNT(*) FROM TIENCONG",
        };
        let (count,): (i64,) = sqlx::query_as(sql).fetch_one(&mut *conn).await?;
        Ok(count)
    }

    /// Current usage versus configured limit
    pub async fn usage(conn: &mut SqliteConnection, kind: LimitKind) -> AppResult<LimitUsage> {
        let current = Self::current_count(&mut *conn, kind).await?;
        let limit = SettingRepository::value_for(&mut *conn, kind).await?;
        Ok(LimitUsage {
            resource: kind.resource_name(),
            current,
            limit,
        })
    }

    /// Reject the pending creation when the configured limit is reached
    pub async fn check(conn: &mut SqliteConnection, kind: LimitKind) -> AppResult<()> {
        let usage = Self::usage(&mut *conn, kind).await?;
        if usage.current >= usage.limit {
            return Err(AppError::LimitExceeded {
                code: kind.error_code(),
                limit: usage.limit,
                current: usage.current,
                message: kind.limit_message(usage.limit),
            });
        }
        Ok(())
    }
}
