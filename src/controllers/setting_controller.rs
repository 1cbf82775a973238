//! Settings controller
//!
//! Reads and updates the four configured limits, and reports current usage
//! versus limit for every admission-checked resource.

use sqlx::SqlitePool;
use validator::Validate;

use crate::models::setting::{LimitKind, LimitUsage, SettingsResponse, UpdateSettingsRequest};
use crate::repositories::limit_repository::LimitRepository;
use crate::repositories::setting_repository::SettingRepository;
use crate::utils::errors::AppResult;

pub struct SettingController {
    pool: SqlitePool,
}

impl SettingController {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_settings(&self) -> AppResult<SettingsResponse> {
        let mut conn = self.pool.acquire().await?;
        Ok(SettingsResponse {
            max_cars: SettingRepository::value_for(&mut conn, LimitKind::Vehicle).await?,
            max_brands: SettingRepository::value_for(&mut conn, LimitKind::Brand).await?,
            max_parts: SettingRepository::value_for(&mut conn, LimitKind::Part).await?,
            max_labors: SettingRepository::value_for(&mut conn, LimitKind::Service).await?,
        })
    }

    pub async fn update_settings(
        &self,
        request: UpdateSettingsRequest,
    ) -> AppResult<SettingsResponse> {
        request.validate()?;

        let mut tx = self.pool.begin().await?;
        for (kind, value) in request.changes() {
            SettingRepository::upsert(&mut *tx, kind, value).await?;
        }
        tx.commit().await?;

        self.get_settings().await
    }

    pub async fn limits(&self) -> AppResult<Vec<LimitUsage>> {
        let mut conn = self.pool.acquire().await?;
        let mut usages = Vec::with_capacity(LimitKind::ALL.len());
        for kind in LimitKind::ALL {
            usages.push(LimitRepository::usage(&mut conn, kind).await?);
        }
        Ok(usages)
    }
}
