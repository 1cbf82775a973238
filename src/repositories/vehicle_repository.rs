//! Vehicle repository

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::vehicle::{Vehicle, VehicleFilters};
use crate::utils::errors::AppResult;

const SELECT_JOINED: &str = r#"
    SELECT x.BienSo, x.MaHieuXe, h.TenHieuXe, x.MaKH, k.HoTen AS TenKH,
           x.NgayTiepNhan, x.TinhTrang
    FROM XE x
    JOIN HIEUXE h ON h.MaHieuXe = x.MaHieuXe
    JOIN KHACHHANG k ON k.MaKH = x.MaKH
"#;

pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filters: &VehicleFilters) -> AppResult<Vec<Vehicle>> {
        let vehicles = if let Some(customer_id) = filters.customer_id {
            let sql = format!("{} WHERE x.MaKH = $1 ORDER BY x.NgayTiepNhan DESC", SELECT_JOINED);
            sqlx::query_as::<_, Vehicle>(&sql)
                .bind(customer_id)
                .fetch_all(&self.pool)
                .await?
        } else if let Some(term) = &filters.search {
            let pattern = format!("%{}%", term);
            let sql = format!(
                "{} WHERE x.BienSo LIKE $1 OR k.HoTen LIKE $1 OR h.TenHieuXe LIKE $1 \
                 ORDER BY x.NgayTiepNhan DESC",
                SELECT_JOINED
            );
            sqlx::query_as::<_, Vehicle>(&sql)
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?
        } else {
            let sql = format!("{} ORDER BY x.NgayTiepNhan DESC", SELECT_JOINED);
            sqlx::query_as::<_, Vehicle>(&sql).fetch_all(&self.pool).await?
        };
        Ok(vehicles)
    }

    pub async fn find_by_plate(&self, plate: &str) -> AppResult<Option<Vehicle>> {
        let sql = format!("{} WHERE x.BienSo = $1", SELECT_JOINED);
        let vehicle = sqlx::query_as::<_, Vehicle>(&sql)
            .bind(plate)
            .fetch_optional(&self.pool)
            .await?;
        Ok(vehicle)
    }

    pub async fn exists(&self, plate: &str) -> AppResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM XE WHERE BienSo = $1)")
                .bind(plate)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Duplicate-plate check, on the current intake transaction
    pub async fn plate_exists(conn: &mut SqliteConnection, plate: &str) -> AppResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM XE WHERE BienSo = $1)")
                .bind(plate)
                .fetch_one(&mut *conn)
                .await?;
        Ok(exists)
    }

    /// Owning customer of a plate, on the current transaction
    pub async fn owner_of(conn: &mut SqliteConnection, plate: &str) -> AppResult<Option<i64>> {
        let row: Option<(i64,)> = sqlx::query_as("SELECT MaKH FROM XE WHERE BienSo = $1")
            .bind(plate)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.map(|(customer_id,)| customer_id))
    }

    /// Insert the intake row, on the current transaction
    pub async fn insert(
        conn: &mut SqliteConnection,
        plate: &str,
        brand_id: i64,
        customer_id: i64,
        received_at: DateTime<Utc>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO XE (BienSo, MaHieuXe, MaKH, NgayTiepNhan, TinhTrang)
            VALUES ($1, $2, $3, $4, 'waiting')
            "#,
        )
        .bind(plate)
        .bind(brand_id)
        .bind(customer_id)
        .bind(received_at)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    pub async fn update_status(&self, plate: &str, status: &str) -> AppResult<()> {
        sqlx::query("UPDATE XE SET TinhTrang = $2 WHERE BienSo = $1")
            .bind(plate)
            .bind(status)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
