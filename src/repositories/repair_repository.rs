//! Repair repository
//!
//! Header rows live in `PHIEUSUACHUA`, detail lines in
//! `CHITIETPHIEUSUACHUA`. Detail inserts and the total recomputation run on
//! the creation transaction; totals are only written after every detail row
//! is in place.

use chrono::{DateTime, Utc};
use sqlx::{SqliteConnection, SqlitePool};

use crate::models::repair::{Repair, RepairDetail};
use crate::utils::errors::AppResult;

const SELECT_HEADER: &str = r#"
    SELECT p.MaPhieuSC, p.BienSo, p.MaKH, k.HoTen AS TenKH, p.GhiChu,
           p.TienCong, p.TienVatTu, p.TongTien, p.NgaySuaChua
    FROM PHIEUSUACHUA p
    JOIN KHACHHANG k ON k.MaKH = p.MaKH
"#;

const SELECT_DETAILS: &str = r#"
    SELECT ct.MaCT, ct.MaPhieuSC, ct.MaTC, ct.MaVTPT,
           COALESCE(t.TenTC, v.TenVTPT) AS TenCT, ct.SoLuong, ct.DonGia
    FROM CHITIETPHIEUSUACHUA ct
    LEFT JOIN TIENCONG t ON t.MaTC = ct.MaTC
    LEFT JOIN KHO v ON v.MaVTPT = ct.MaVTPT
"#;

pub struct RepairRepository {
    pool: SqlitePool,
}

impl RepairRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Repair>> {
        let sql = format!("{} ORDER BY p.NgaySuaChua DESC, p.MaPhieuSC DESC", SELECT_HEADER);
        let repairs = sqlx::query_as::<_, Repair>(&sql).fetch_all(&self.pool).await?;
        Ok(repairs)
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Repair>> {
        let sql = format!("{} WHERE p.MaPhieuSC = $1", SELECT_HEADER);
        let repair = sqlx::query_as::<_, Repair>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(repair)
    }

    pub async fn details_for(&self, repair_id: i64) -> AppResult<Vec<RepairDetail>> {
        let sql = format!("{} WHERE ct.MaPhieuSC = $1 ORDER BY ct.MaCT", SELECT_DETAILS);
        let details = sqlx::query_as::<_, RepairDetail>(&sql)
            .bind(repair_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(details)
    }

    /// Insert the header with zero totals, on the current transaction
    pub async fn insert_header(
        conn: &mut SqliteConnection,
        plate: &str,
        customer_id: i64,
        notes: Option<&str>,
        repaired_at: DateTime<Utc>,
    ) -> AppResult<i64> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO PHIEUSUACHUA (BienSo, MaKH, GhiChu, TienCong, TienVatTu, TongTien, NgaySuaChua)
            VALUES ($1, $2, $3, 0, 0, 0, $4)
            RETURNING MaPhieuSC
            "#,
        )
        .bind(plate)
        .bind(customer_id)
        .bind(notes)
        .bind(repaired_at)
        .fetch_one(&mut *conn)
        .await?;
        Ok(id)
    }

    /// Insert a labor line (quantity is conventionally 1 for services)
    pub async fn insert_service_detail(
        conn: &mut SqliteConnection,
        repair_id: i64,
        service_id: i64,
        unit_price: i64,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO CHITIETPHIEUSUACHUA (MaPhieuSC, MaTC, MaVTPT, SoLuong, DonGia)
            VALUES ($1, $2, NULL, 1, $3)
            "#,
        )
        .bind(repair_id)
        .bind(service_id)
        .bind(unit_price)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    /// Insert a part line with the price captured at time of use
    pub async fn insert_part_detail(
        conn: &mut SqliteConnection,
        repair_id: i64,
        part_id: i64,
        quantity: i64,
        unit_price: i64,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO CHITIETPHIEUSUACHUA (MaPhieuSC, MaTC, MaVTPT, SoLuong, DonGia)
            VALUES ($1, NULL, $2, $3, $4)
            "#,
        )
        .bind(repair_id)
        .bind(part_id)
        .bind(quantity)
        .bind(unit_price)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    /// Recompute the header totals from the detail rows
    ///
    /// Called once per save, after all detail rows are inserted.
    pub async fn recompute_totals(
        conn: &mut SqliteConnection,
        repair_id: i64,
    ) -> AppResult<(i64, i64, i64)> {
        let (labor,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(SoLuong * DonGia), 0) FROM CHITIETPHIEUSUACHUA \
             WHERE MaPhieuSC = $1 AND MaTC IS NOT NULL",
        )
        .bind(repair_id)
        .fetch_one(&mut *conn)
        .await?;

        let (parts,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(SUM(SoLuong * DonGia), 0) FROM CHITIETPHIEUSUACHUA \
             WHERE MaPhieuSC = $1 AND MaVTPT IS NOT NULL",
        )
        .bind(repair_id)
        .fetch_one(&mut *conn)
        .await?;

        let total = labor + parts;
        sqlx::query(
            "UPDATE PHIEUSUACHUA SET TienCong = $2, TienVatTu = $3, TongTien = $4 \
             WHERE MaPhieuSC = $1",
        )
        .bind(repair_id)
        .bind(labor)
        .bind(parts)
        .bind(total)
        .execute(&mut *conn)
        .await?;

        Ok((labor, parts, total))
    }

    /// Existence check on the current transaction
    pub async fn exists_on(conn: &mut SqliteConnection, repair_id: i64) -> AppResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM PHIEUSUACHUA WHERE MaPhieuSC = $1)")
                .bind(repair_id)
                .fetch_one(&mut *conn)
                .await?;
        Ok(exists)
    }

    /// Part lines of one repair, on the current transaction
    pub async fn part_lines(
        conn: &mut SqliteConnection,
        repair_id: i64,
    ) -> AppResult<Vec<(i64, i64)>> {
        let lines: Vec<(i64, i64)> = sqlx::query_as(
            "SELECT MaVTPT, SoLuong FROM CHITIETPHIEUSUACHUA \
             WHERE MaPhieuSC = $1 AND MaVTPT IS NOT NULL",
        )
        .bind(repair_id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(lines)
    }

    /// Delete the detail rows, on the current transaction
    pub async fn delete_details(conn: &mut SqliteConnection, repair_id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM CHITIETPHIEUSUACHUA WHERE MaPhieuSC = $1")
            .bind(repair_id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }

    /// Delete the header row, on the current transaction
    pub async fn delete_header(conn: &mut SqliteConnection, repair_id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM PHIEUSUACHUA WHERE MaPhieuSC = $1")
            .bind(repair_id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
