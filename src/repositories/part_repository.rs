//! Part repository
//!
//! Stock moves only through `increment_stock` / `try_decrement_stock`, both
//! running on the caller's transaction. The decrement carries its own
//! `SoLuongTon >= quantity` guard so the quantity can never go negative.

use sqlx::{SqliteConnection, SqlitePool};

use crate::models::part::Part;
use crate::utils::errors::{not_found_error, AppResult};

pub struct PartRepository {
    pool: SqlitePool,
}

impl PartRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, search: Option<String>) -> AppResult<Vec<Part>> {
        let parts = match search {
            Some(term) => {
                let pattern = format!("%{}%", term);
                sqlx::query_as::<_, Part>(
                    "SELECT * FROM KHO WHERE TenVTPT LIKE $1 ORDER BY MaVTPT",
                )
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Part>("SELECT * FROM KHO ORDER BY MaVTPT")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(parts)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Part>> {
        let part = sqlx::query_as::<_, Part>("SELECT * FROM KHO WHERE MaVTPT = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(part)
    }

    pub async fn name_exists(&self, name: &str) -> AppResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM KHO WHERE TenVTPT = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Lookup on the current transaction
    pub async fn find_on(conn: &mut SqliteConnection, id: i64) -> AppResult<Option<Part>> {
        let part = sqlx::query_as::<_, Part>("SELECT * FROM KHO WHERE MaVTPT = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(part)
    }

    /// Insert a catalog row, on the current transaction
    pub async fn create(
        conn: &mut SqliteConnection,
        name: &str,
        price: i64,
        stock: i64,
    ) -> AppResult<Part> {
        let part = sqlx::query_as::<_, Part>(
            r#"
            INSERT INTO KHO (TenVTPT, DonGia, SoLuongTon)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(price)
        .bind(stock)
        .fetch_one(&mut *conn)
        .await?;
        Ok(part)
    }

    pub async fn update(
        &self,
        id: i64,
        name: Option<String>,
        price: Option<i64>,
    ) -> AppResult<Part> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Part", id))?;

        let part = sqlx::query_as::<_, Part>(
            r#"
            UPDATE KHO
            SET TenVTPT = $2, DonGia = $3
            WHERE MaVTPT = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(price.unwrap_or(current.price))
        .fetch_one(&self.pool)
        .await?;
        Ok(part)
    }

    /// Whether any repair detail consumed this part
    pub async fn is_referenced(&self, id: i64) -> AppResult<bool> {
        let (referenced,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM CHITIETPHIEUSUACHUA WHERE MaVTPT = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(referenced)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM KHO WHERE MaVTPT = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Increase on-hand quantity, on the current transaction
    pub async fn increment_stock(
        conn: &mut SqliteConnection,
        id: i64,
        quantity: i64,
    ) -> AppResult<()> {
        sqlx::query("UPDATE KHO SET SoLuongTon = SoLuongTon + $2 WHERE MaVTPT = $1")
            .bind(id)
            .bind(quantity)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Decrease on-hand quantity, guarded against going negative
    ///
    /// Returns false when the part lacks sufficient stock; nothing is
    /// written in that case.
    pub async fn try_decrement_stock(
        conn: &mut SqliteConnection,
        id: i64,
        quantity: i64,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE KHO SET SoLuongTon = SoLuongTon - $2 \
             WHERE MaVTPT = $1 AND SoLuongTon >= $2",
        )
        .bind(id)
        .bind(quantity)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected() == 1)
    }
}
