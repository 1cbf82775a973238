//! Customer repository
//!
//! The outstanding debt column does not exist in `KHACHHANG`; it is derived
//! per row as the sum of repair totals minus the sum of payments.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::customer::{Customer, CustomerWithDebt};
use crate::utils::errors::{not_found_error, AppResult};

const SELECT_WITH_DEBT: &str = r#"
    SELECT k.MaKH, k.HoTen, k.DienThoai, k.DiaChi, k.NgayTao,
           COALESCE((SELECT SUM(p.TongTien) FROM PHIEUSUACHUA p WHERE p.MaKH = k.MaKH), 0)
         - COALESCE((SELECT SUM(t.SoTien) FROM PHIEUTHUTIEN t WHERE t.MaKH = k.MaKH), 0)
           AS TienNo
    FROM KHACHHANG k
"#;

pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, search: Option<String>) -> AppResult<Vec<CustomerWithDebt>> {
        let customers = match search {
            Some(term) => {
                let pattern = format!("%{}%", term);
                let sql = format!(
                    "{} WHERE k.HoTen LIKE $1 OR k.DienThoai LIKE $1 ORDER BY k.MaKH",
                    SELECT_WITH_DEBT
                );
                sqlx::query_as::<_, CustomerWithDebt>(&sql)
                    .bind(pattern)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!("{} ORDER BY k.MaKH", SELECT_WITH_DEBT);
                sqlx::query_as::<_, CustomerWithDebt>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(customers)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<CustomerWithDebt>> {
        let sql = format!("{} WHERE k.MaKH = $1", SELECT_WITH_DEBT);
        let customer = sqlx::query_as::<_, CustomerWithDebt>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(customer)
    }

    pub async fn exists(&self, id: i64) -> AppResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM KHACHHANG WHERE MaKH = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn create(
        &self,
        name: &str,
        phone: &str,
        address: Option<String>,
    ) -> AppResult<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO KHACHHANG (HoTen, DienThoai, DiaChi, NgayTao)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(address)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(customer)
    }

    pub async fn update(
        &self,
        id: i64,
        name: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> AppResult<Customer> {
        let current = sqlx::query_as::<_, Customer>("SELECT * FROM KHACHHANG WHERE MaKH = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("Customer", id))?;

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            UPDATE KHACHHANG
            SET HoTen = $2, DienThoai = $3, DiaChi = $4
            WHERE MaKH = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(phone.unwrap_or(current.phone))
        .bind(address.or(current.address))
        .fetch_one(&self.pool)
        .await?;
        Ok(customer)
    }

    /// Whether the customer is referenced by vehicles, repairs or payments
    pub async fn has_references(&self, id: i64) -> AppResult<bool> {
        let (referenced,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(SELECT 1 FROM XE WHERE MaKH = $1)
                OR EXISTS(SELECT 1 FROM PHIEUSUACHUA WHERE MaKH = $1)
                OR EXISTS(SELECT 1 FROM PHIEUTHUTIEN WHERE MaKH = $1)
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(referenced)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM KHACHHANG WHERE MaKH = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
