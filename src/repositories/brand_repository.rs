//! Brand repository
//!
//! Brands are found-or-created during vehicle intake, so the lookup and
//! insert run on the intake transaction's connection.

use sqlx::{SqliteConnection, SqlitePool};

use crate::models::brand::Brand;
use crate::utils::errors::AppResult;

pub struct BrandRepository {
    pool: SqlitePool,
}

impl BrandRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Brand>> {
        let brands = sqlx::query_as::<_, Brand>("SELECT * FROM HIEUXE ORDER BY TenHieuXe")
            .fetch_all(&self.pool)
            .await?;
        Ok(brands)
    }

    /// Lookup by exact name, on the current transaction
    pub async fn find_by_name(
        conn: &mut SqliteConnection,
        name: &str,
    ) -> AppResult<Option<Brand>> {
        let brand = sqlx::query_as::<_, Brand>("SELECT * FROM HIEUXE WHERE TenHieuXe = $1")
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(brand)
    }

    /// Insert a new brand, on the current transaction
    pub async fn create(conn: &mut SqliteConnection, name: &str) -> AppResult<Brand> {
        let brand = sqlx::query_as::<_, Brand>(
            "INSERT INTO HIEUXE (TenHieuXe) VALUES ($1) RETURNING *",
        )
        .bind(name)
        .fetch_one(&mut *conn)
        .await?;
        Ok(brand)
    }
}
