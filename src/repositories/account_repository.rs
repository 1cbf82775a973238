//! Account repository

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::account::Account;
use crate::utils::errors::{not_found_error, AppResult};

pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Account>> {
        let accounts = sqlx::query_as::<_, Account>("SELECT * FROM TAIKHOAN ORDER BY MaTK")
            .fetch_all(&self.pool)
            .await?;
        Ok(accounts)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        let account = sqlx::query_as::<_, Account>("SELECT * FROM TAIKHOAN WHERE MaTK = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(account)
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let account =
            sqlx::query_as::<_, Account>("SELECT * FROM TAIKHOAN WHERE TenDangNhap = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await?;
        Ok(account)
    }

    pub async fn username_exists(&self, username: &str) -> AppResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM TAIKHOAN WHERE TenDangNhap = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    pub async fn create(
        &self,
        display_name: &str,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> AppResult<Account> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO TAIKHOAN (TenHienThi, TenDangNhap, MatKhau, VaiTro, TrangThai, NgayTao)
            VALUES ($1, $2, $3, $4, 'active', $5)
            RETURNING *
            "#,
        )
        .bind(display_name)
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(account)
    }

    pub async fn update(
        &self,
        id: i64,
        display_name: Option<String>,
        password_hash: Option<String>,
        role: Option<String>,
        status: Option<String>,
    ) -> AppResult<Account> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Account", id))?;

        let account = sqlx::query_as::<_, Account>(
            r#"
            UPDATE TAIKHOAN
            SET TenHienThi = $2, MatKhau = $3, VaiTro = $4, TrangThai = $5
            WHERE MaTK = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(display_name.unwrap_or(current.display_name))
        .bind(password_hash.unwrap_or(current.password_hash))
        .bind(role.unwrap_or(current.role))
        .bind(status.unwrap_or(current.status))
        .fetch_one(&self.pool)
        .await?;
        Ok(account)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM TAIKHOAN WHERE MaTK = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
