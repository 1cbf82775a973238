//! Service repository

use sqlx::{SqliteConnection, SqlitePool};

use crate::models::service::Service;
use crate::utils::errors::{not_found_error, AppResult};

pub struct ServiceRepository {
    pool: SqlitePool,
}

impl ServiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Service>> {
        let services = sqlx::query_as::<_, Service>("SELECT * FROM TIENCONG ORDER BY MaTC")
            .fetch_all(&self.pool)
            .await?;
        Ok(services)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Service>> {
        let service = sqlx::query_as::<_, Service>("SELECT * FROM TIENCONG WHERE MaTC = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(service)
    }

    pub async fn name_exists(&self, name: &str) -> AppResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM TIENCONG WHERE TenTC = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Lookup on the current transaction
    pub async fn find_on(conn: &mut SqliteConnection, id: i64) -> AppResult<Option<Service>> {
        let service = sqlx::query_as::<_, Service>("SELECT * FROM TIENCONG WHERE MaTC = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(service)
    }

    /// Insert a catalog row, on the current transaction
    pub async fn create(
        conn: &mut SqliteConnection,
        name: &str,
        price: i64,
    ) -> AppResult<Service> {
        let service = sqlx::query_as::<_, Service>(
            "INSERT INTO TIENCONG (TenTC, DonGia) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(price)
        .fetch_one(&mut *conn)
        .await?;
        Ok(service)
    }

    pub async fn update(
        &self,
        id: i64,
        name: Option<String>,
        price: Option<i64>,
    ) -> AppResult<Service> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Service", id))?;

        let service = sqlx::query_as::<_, Service>(
            r#"
            UPDATE TIENCONG
            SET TenTC = $2, DonGia = $3
            WHERE MaTC = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(price.unwrap_or(current.price))
        .fetch_one(&self.pool)
        .await?;
        Ok(service)
    }

    /// Whether any repair detail references this service
    pub async fn is_referenced(&self, id: i64) -> AppResult<bool> {
        let (referenced,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM CHITIETPHIEUSUACHUA WHERE MaTC = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(referenced)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM TIENCONG WHERE MaTC = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
