//! Database bootstrap
//!
//! Creates the SQLite schema idempotently at startup and seeds the default
//! settings rows and the main admin account. Table names keep the original
//! Vietnamese business terms.

use sqlx::SqlitePool;

use crate::utils::errors::{AppError, AppResult};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS TAIKHOAN (
        MaTK        INTEGER PRIMARY KEY AUTOINCREMENT,
        TenHienThi  TEXT NOT NULL,
        TenDangNhap TEXT NOT NULL UNIQUE,
        MatKhau     TEXT NOT NULL,
        VaiTro      TEXT NOT NULL DEFAULT 'staff',
        TrangThai   TEXT NOT NULL DEFAULT 'active',
        NgayTao     TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS KHACHHANG (
        MaKH      INTEGER PRIMARY KEY AUTOINCREMENT,
        HoTen     TEXT NOT NULL,
        DienThoai TEXT NOT NULL,
        DiaChi    TEXT,
        NgayTao   TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS HIEUXE (
        MaHieuXe  INTEGER PRIMARY KEY AUTOINCREMENT,
        TenHieuXe TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS XE (
        BienSo       TEXT PRIMARY KEY,
        MaHieuXe     INTEGER NOT NULL REFERENCES HIEUXE(MaHieuXe),
        MaKH         INTEGER NOT NULL REFERENCES KHACHHANG(MaKH),
        NgayTiepNhan TEXT NOT NULL,
        TinhTrang    TEXT NOT NULL DEFAULT 'waiting'
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS TIENCONG (
        MaTC   INTEGER PRIMARY KEY AUTOINCREMENT,
        TenTC  TEXT NOT NULL UNIQUE,
        DonGia INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS KHO (
        MaVTPT     INTEGER PRIMARY KEY AUTOINCREMENT,
        TenVTPT    TEXT NOT NULL UNIQUE,
        DonGia     INTEGER NOT NULL,
        SoLuongTon INTEGER NOT NULL DEFAULT 0 CHECK (SoLuongTon >= 0)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS PHIEUSUACHUA (
        MaPhieuSC   INTEGER PRIMARY KEY AUTOINCREMENT,
        BienSo      TEXT NOT NULL REFERENCES XE(BienSo),
        MaKH        INTEGER NOT NULL REFERENCES KHACHHANG(MaKH),
        GhiChu      TEXT,
        TienCong    INTEGER NOT NULL DEFAULT 0,
        TienVatTu   INTEGER NOT NULL DEFAULT 0,
        TongTien    INTEGER NOT NULL DEFAULT 0,
        NgaySuaChua TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS CHITIETPHIEUSUACHUA (
        MaCT      INTEGER PRIMARY KEY AUTOINCREMENT,
        MaPhieuSC INTEGER NOT NULL REFERENCES PHIEUSUACHUA(MaPhieuSC),
        MaTC      INTEGER REFERENCES TIENCONG(MaTC),
        MaVTPT    INTEGER REFERENCES KHO(MaVTPT),
        SoLuong   INTEGER NOT NULL DEFAULT 1,
        DonGia    INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS PHIEUTHUTIEN (
        MaPhieu INTEGER PRIMARY KEY AUTOINCREMENT,
        MaKH    INTEGER NOT NULL REFERENCES KHACHHANG(MaKH),
        SoTien  INTEGER NOT NULL,
        GhiChu  TEXT,
        NgayThu TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS PHIEUNHAPVTPT (
        MaPhieuNhap INTEGER PRIMARY KEY AUTOINCREMENT,
        MaVTPT      INTEGER NOT NULL REFERENCES KHO(MaVTPT),
        SoLuong     INTEGER NOT NULL,
        GhiChu      TEXT,
        NgayNhap    TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS THAMSO (
        MaThamSo  TEXT PRIMARY KEY,
        TenThamSo TEXT NOT NULL,
        GiaTri    INTEGER NOT NULL,
        GhiChu    TEXT
    )
    "#,
];

/// Default settings rows, inserted only when the key is absent
const DEFAULT_SETTINGS: &[(&str, &str, i64)] = &[
    ("SoXeToiDa", "Số xe sửa chữa tối đa trong ngày", 30),
    ("SoHieuXeToiDa", "Số hiệu xe tối đa", 10),
    ("SoLoaiVatTuToiDa", "Số loại vật tư phụ tùng tối đa", 200),
    ("SoLoaiTienCongToiDa", "Số loại tiền công tối đa", 100),
];

/// Create all tables if they do not exist yet
pub async fn init_schema(pool: &SqlitePool) -> AppResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Seed the default settings and the main admin account
pub async fn seed_defaults(pool: &SqlitePool) -> AppResult<()> {
    for (key, name, value) in DEFAULT_SETTINGS {
        sqlx::query(
            "INSERT OR IGNORE INTO THAMSO (MaThamSo, TenThamSo, GiaTri) VALUES ($1, $2, $3)",
        )
        .bind(key)
        .bind(name)
        .bind(value)
        .execute(pool)
        .await?;
    }

    let (admin_count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM TAIKHOAN WHERE TenDangNhap = 'admin'")
            .fetch_one(pool)
            .await?;

    if admin_count == 0 {
        let password_hash = bcrypt::hash("admin123", bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Hash(e.to_string()))?;
        sqlx::query(
            r#"
            INSERT INTO TAIKHOAN (TenHienThi, TenDangNhap, MatKhau, VaiTro, TrangThai, NgayTao)
            VALUES ('Quản trị viên', 'admin', $1, 'admin', 'active', $2)
            "#,
        )
        .bind(password_hash)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await?;
        tracing::info!("Seeded default admin account");
    }

    Ok(())
}
