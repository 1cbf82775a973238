//! Import controller
//!
//! An import increments the part's stock in the same transaction as the
//! ledger insert. Deleting an import reverses the increment, guarded so the
//! reversal can never drive the stock negative.

use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::models::import::{CreateImportRequest, ImportResponse};
use crate::repositories::import_repository::ImportRepository;
use crate::repositories::part_repository::PartRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct ImportController {
    pool: SqlitePool,
    repository: ImportRepository,
}

impl ImportController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: ImportRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<ImportResponse>> {
        let records = self.repository.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn create(&self, request: CreateImportRequest) -> AppResult<ImportResponse> {
        request.validate()?;

        let mut tx = self.pool.begin().await?;

        let part = PartRepository::find_on(&mut *tx, request.part_id)
            .await?
            .ok_or_else(|| not_found_error("Part", request.part_id))?;

        let id = ImportRepository::insert(
            &mut *tx,
            part.id,
            request.quantity,
            request.note.as_deref(),
            Utc::now(),
        )
        .await?;
        PartRepository::increment_stock(&mut *tx, part.id, request.quantity).await?;

        tx.commit().await?;

        let record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal("Import vanished after insert".to_string()))?;
        Ok(record.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let record = ImportRepository::find_on(&mut *tx, id)
            .await?
            .ok_or_else(|| not_found_error("Import", id))?;

        // Reverse the stock increment this import applied
        if !PartRepository::try_decrement_stock(&mut *tx, record.part_id, record.quantity).await? {
            let part = PartRepository::find_on(&mut *tx, record.part_id).await?;
            return Err(AppError::InsufficientStock {
                part: record.part_name,
                requested: record.quantity,
                available: part.map(|p| p.stock).unwrap_or(0),
            });
        }

        ImportRepository::delete(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
