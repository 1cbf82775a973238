//! Payment repository

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::payment::Payment;
use crate::utils::errors::{AppError, AppResult};

const SELECT_JOINED: &str = r#"
    SELECT t.MaPhieu, t.MaKH, k.HoTen AS TenKH, t.SoTien, t.GhiChu, t.NgayThu
    FROM PHIEUTHUTIEN t
    JOIN KHACHHANG k ON k.MaKH = t.MaKH
"#;

pub struct PaymentRepository {
    pool: SqlitePool,
}

impl PaymentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, customer_id: Option<i64>) -> AppResult<Vec<Payment>> {
        let payments = match customer_id {
            Some(id) => {
                let sql = format!(
                    "{} WHERE t.MaKH = $1 ORDER BY t.NgayThu DESC, t.MaPhieu DESC",
                    SELECT_JOINED
                );
                sqlx::query_as::<_, Payment>(&sql)
                    .bind(id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!("{} ORDER BY t.NgayThu DESC, t.MaPhieu DESC", SELECT_JOINED);
                sqlx::query_as::<_, Payment>(&sql).fetch_all(&self.pool).await?
            }
        };
        Ok(payments)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Payment>> {
        let sql = format!("{} WHERE t.MaPhieu = $1", SELECT_JOINED);
        let payment = sqlx::query_as::<_, Payment>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(payment)
    }

    pub async fn create(
        &self,
        customer_id: i64,
        amount: i64,
        note: Option<String>,
    ) -> AppResult<Payment> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO PHIEUTHUTIEN (MaKH, SoTien, GhiChu, NgayThu)
            VALUES ($1, $2, $3, $4)
            RETURNING MaPhieu
            "#,
        )
        .bind(customer_id)
        .bind(amount)
        .bind(note)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal("Payment vanished after insert".to_string()))
    }
}
