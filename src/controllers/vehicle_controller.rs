//! Vehicle controller
//!
//! Vehicle intake runs as one transaction: duplicate-plate check, daily
//! vehicle admission check, brand find-or-create under the brand admission
//! check, then the insert. Either everything lands or nothing does.

use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

use crate::models::setting::LimitKind;
use crate::models::vehicle::{
    CreateVehicleRequest, UpdateVehicleStatusRequest, VehicleFilters, VehicleResponse,
    VehicleStatus,
};
use crate::repositories::brand_repository::BrandRepository;
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::limit_repository::LimitRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct VehicleController {
    pool: SqlitePool,
    repository: VehicleRepository,
    customers: CustomerRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            customers: CustomerRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn list(&self, filters: VehicleFilters) -> AppResult<Vec<VehicleResponse>> {
        let vehicles = self.repository.list(&filters).await?;
        Ok(vehicles.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, plate: &str) -> AppResult<VehicleResponse> {
        let vehicle = self
            .repository
            .find_by_plate(plate)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", plate))?;
        Ok(vehicle.into())
    }

    pub async fn intake(&self, request: CreateVehicleRequest) -> AppResult<VehicleResponse> {
        request.validate()?;
        let plate = request.plate.trim().to_string();
        let brand_name = request.brand_name.trim().to_string();

        if !self.customers.exists(request.customer_id).await? {
            return Err(not_found_error("Customer", request.customer_id));
        }

        let mut tx = self.pool.begin().await?;

        if VehicleRepository::plate_exists(&mut *tx, &plate).await? {
            return Err(AppError::Conflict("Biển số xe đã tồn tại".to_string()));
        }

        LimitRepository::check(&mut *tx, LimitKind::Vehicle).await?;

        let brand = match BrandRepository::find_by_name(&mut *tx, &brand_name).await? {
            Some(brand) => brand,
            None => {
                LimitRepository::check(&mut *tx, LimitKind::Brand).await?;
                BrandRepository::create(&mut *tx, &brand_name).await?
            }
        };

        VehicleRepository::insert(&mut *tx, &plate, brand.id, request.customer_id, Utc::now())
            .await?;

        tx.commit().await?;

        self.get(&plate).await
    }

    pub async fn update_status(
        &self,
        plate: &str,
        request: UpdateVehicleStatusRequest,
    ) -> AppResult<VehicleResponse> {
        let status = VehicleStatus::parse(&request.status).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unknown vehicle status '{}', expected waiting/repairing/completed",
                request.status
            ))
        })?;

        if !self.repository.exists(plate).await? {
            return Err(not_found_error("Vehicle", plate));
        }

        self.repository.update_status(plate, status.as_str()).await?;
        self.get(plate).await
    }
}
