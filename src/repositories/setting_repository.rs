//! Settings repository
//!
//! Reads and upserts the `THAMSO` key/value rows. Values are re-read on
//! every admission check so a changed limit takes effect immediately.

use sqlx::SqliteConnection;

use crate::models::setting::{LimitKind, Setting};
use crate::utils::errors::AppResult;

pub struct SettingRepository;

impl SettingRepository {
    /// All setting rows
    pub async fn all(conn: &mut SqliteConnection) -> AppResult<Vec<Setting>> {
        let settings =
            sqlx::query_as::<_, Setting>("SELECT * FROM THAMSO ORDER BY MaThamSo")
                .fetch_all(&mut *conn)
                .await?;
        Ok(settings)
    }

    /// Configured value for one limit kind, falling back to its default
    pub async fn value_for(conn: &mut SqliteConnection, kind: LimitKind) -> AppResult<i64> {
        let row: Option<(i64,)> =
            sqlx::query_as("SELECT GiaTri FROM THAMSO WHERE MaThamSo = $1")
                .bind(kind.setting_key())
                .fetch_optional(&mut *conn)
                .await?;
        Ok(row.map(|(value,)| value).unwrap_or_else(|| kind.default_limit()))
    }

    /// Insert or update the row for one limit kind
    pub async fn upsert(
        conn: &mut SqliteConnection,
        kind: LimitKind,
        value: i64,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO THAMSO (MaThamSo, TenThamSo, GiaTri)
            VALUES ($1, $2, $3)
            ON CONFLICT(MaThamSo) DO UPDATE SET GiaTri = excluded.GiaTri
            "#,
        )
        .bind(kind.setting_key())
        .bind(kind.setting_name())
        .bind(value)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }
}
