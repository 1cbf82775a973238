//! Import repository
//!
//! Stock-increasing ledger rows in `PHIEUNHAPVTPT`. Insert and delete run on
//! the caller's transaction together with the matching stock adjustment.

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::import::ImportRecord;
use crate::utils::errors::AppResult;

const SELECT_JOINED: &str = r#"
    SELECT n.MaPhieuNhap, n.MaVTPT, v.TenVTPT, n.SoLuong, n.GhiChu, n.NgayNhap
    FROM PHIEUNHAPVTPT n
    JOIN KHO v ON v.MaVTPT = n.MaVTPT
"#;

pub struct ImportRepository {
    pool: SqlitePool,
}

impl ImportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<ImportRecord>> {
        let sql = format!("{} ORDER BY n.NgayNhap DESC, n.MaPhieuNhap DESC", SELECT_JOINED);
        let records = sqlx::query_as::<_, ImportRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<ImportRecord>> {
        let sql = format!("{} WHERE n.MaPhieuNhap = $1", SELECT_JOINED);
        let record = sqlx::query_as::<_, ImportRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    /// Lookup on the current transaction, for the delete-and-restore path
    pub async fn find_on(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> AppResult<Option<ImportRecord>> {
        let sql = format!("{} WHERE n.MaPhieuNhap = $1", SELECT_JOINED);
        let record = sqlx::query_as::<_, ImportRecord>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(record)
    }

    /// Insert a ledger row, on the current transaction
    pub async fn insert(
        conn: &mut SqliteConnection,
        part_id: i64,
        quantity: i64,
        note: Option<&str>,
        imported_at: DateTime<Utc>,
    ) -> AppResult<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO PHIEUNHAPVTPT (MaVTPT, SoLuong, GhiChu, NgayNhap)
            VALUES ($1, $2, $3, $4)
            RETURNING MaPhieuNhap
            "#,
        )
        .bind(part_id)
        .bind(quantity)
        .bind(note)
        .bind(imported_at)
        .fetch_one(&mut *conn)
        .await?;
        Ok(id)
    }

    /// Delete a ledger row, on the current transaction
    pub async fn delete(conn: &mut SqliteConnection, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM PHIEUNHAPVTPT WHERE MaPhieuNhap = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
