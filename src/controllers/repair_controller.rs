//! Repair order controller
//!
//! Creation runs as one transaction: header insert, detail inserts with
//! stock-guarded decrements for part lines, then a single total
//! recomputation once every detail row is in place. Deletion symmetrically
//! restores the stock consumed by part lines before removing the rows.

use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::models::repair::{CreateRepairRequest, RepairLine, RepairResponse};
use crate::repositories::part_repository::PartRepository;
use crate::repositories::repair_repository::RepairRepository;
use crate::repositories::service_repository::ServiceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct RepairController {
    pool: SqlitePool,
    repository: RepairRepository,
}

impl RepairController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: RepairRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<RepairResponse>> {
        let repairs = self.repository.list().await?;
        Ok(repairs.into_iter().map(RepairResponse::from_header).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<RepairResponse> {
        let repair = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Repair order", id))?;
        let details = self.repository.details_for(id).await?;
        Ok(RepairResponse::with_details(repair, details))
    }

    pub async fn create(&self, request: CreateRepairRequest) -> AppResult<RepairResponse> {
        request.validate()?;
        let plate = request.vehicle_id.trim().to_string();

        // Enforce the service-XOR-part shape before touching the database
        let lines = request
            .repair_details
            .into_iter()
            .map(|detail| detail.into_line())
            .collect::<AppResult<Vec<RepairLine>>>()?;

        let mut tx = self.pool.begin().await?;

        let customer_id = VehicleRepository::owner_of(&mut *tx, &plate)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &plate))?;

        let repair_id = RepairRepository::insert_header(
            &mut *tx,
            &plate,
            customer_id,
            request.notes.as_deref(),
            Utc::now(),
        )
        .await?;

        for line in lines {
            match line {
                RepairLine::Service { service_id } => {
                    let service = ServiceRepository::find_on(&mut *tx, service_id)
                        .await?
                        .ok_or_else(|| not_found_error("Service", service_id))?;
                    RepairRepository::insert_service_detail(
                        &mut *tx,
                        repair_id,
                        service.id,
                        service.price,
                    )
                    .await?;
                }
                RepairLine::Part { part_id, quantity } => {
                    let part = PartRepository::find_on(&mut *tx, part_id)
                        .await?
                        .ok_or_else(|| not_found_error("Part", part_id))?;
                    if !PartRepository::try_decrement_stock(&mut *tx, part.id, quantity).await? {
                        return Err(AppError::InsufficientStock {
                            part: part.name,
                            requested: quantity,
                            available: part.stock,
                        });
                    }
                    RepairRepository::insert_part_detail(
                        &mut *tx,
                        repair_id,
                        part.id,
                        quantity,
                        part.price,
                    )
                    .await?;
                }
            }
        }

        // All detail rows are in place; only now does the header get its totals
        RepairRepository::recompute_totals(&mut *tx, repair_id).await?;

        tx.commit().await?;

        self.get(repair_id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        if !RepairRepository::exists_on(&mut *tx, id).await? {
            return Err(not_found_error("Repair order", id));
        }

        // Give back the stock consumed by part lines before dropping them
        for (part_id, quantity) in RepairRepository::part_lines(&mut *tx, id).await? {
            PartRepository::increment_stock(&mut *tx, part_id, quantity).await?;
        }

        RepairRepository::delete_details(&mut *tx, id).await?;
        RepairRepository::delete_header(&mut *tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
