//! Report repository
//!
//! Read-only date-range aggregations for the admin UI. Both queries scope
//! their range on the server-local calendar day.

use sqlx::SqlitePool;

use crate::models::report::{InventoryRow, RevenueRow};
use crate::utils::errors::AppResult;

pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Revenue grouped per calendar day within `[from, to]`
    pub async fn revenue(&self, from: &str, to: &str) -> AppResult<Vec<RevenueRow>> {
        let rows = sqlx::query_as::<_, RevenueRow>(
            r#"
            SELECT DATE(NgaySuaChua, 'localtime') AS Ngay,
                   COUNT(*) AS SoLuotXe,
                   COALESCE(SUM(TienCong), 0) AS TongTienCong,
                   COALESCE(SUM(TienVatTu), 0) AS TongTienVatTu,
                   COALESCE(SUM(TongTien), 0) AS TongDoanhThu
            FROM PHIEUSUACHUA
            WHERE DATE(NgaySuaChua, 'localtime') BETWEEN $1 AND $2
            GROUP BY DATE(NgaySuaChua, 'localtime')
            ORDER BY Ngay
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Per-part stock movement within `[from, to]`
    ///
    /// The beginning balance is derived backwards from the current stock
    /// snapshot: `beginning = current + consumed - imported`.
    pub async fn inventory(&self, from: &str, to: &str) -> AppResult<Vec<InventoryRow>> {
        let rows = sqlx::query_as::<_, InventoryRow>(
            r#"
            SELECT k.MaVTPT,
                   k.TenVTPT,
                   k.SoLuongTon + COALESCE(c.XuatTrongKy, 0) - COALESCE(n.NhapTrongKy, 0)
                       AS TonDau,
                   COALESCE(n.NhapTrongKy, 0) AS NhapTrongKy,
                   COALESCE(c.XuatTrongKy, 0) AS XuatTrongKy,
                   k.SoLuongTon AS TonCuoi
            FROM KHO k
            LEFT JOIN (
                SELECT MaVTPT, SUM(SoLuong) AS NhapTrongKy
                FROM PHIEUNHAPVTPT
                WHERE DATE(NgayNhap, 'localtime') BETWEEN $1 AND $2
                GROUP BY MaVTPT
            ) n ON n.MaVTPT = k.MaVTPT
            LEFT JOIN (
                SELECT ct.MaVTPT, SUM(ct.SoLuong) AS XuatTrongKy
                FROM CHITIETPHIEUSUACHUA ct
                JOIN PHIEUSUACHUA p ON p.MaPhieuSC = ct.MaPhieuSC
                WHERE ct.MaVTPT IS NOT NULL
                  AND DATE(p.NgaySuaChua, 'localtime') BETWEEN $1 AND $2
                GROUP BY ct.MaVTPT
            ) c ON c.MaVTPT = k.MaVTPT
            ORDER BY k.MaVTPT
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
