//! SQL layer
//!
//! One repository per resource. Plain reads go through the pool; writes
//! that belong to a multi-statement sequence take a `SqliteConnection`
//! so the controller can run them inside one transaction.

pub mod account_repository;
pub mod brand_repository;
pub mod customer_repository;
pub mod import_repository;
pub mod limit_repository;
pub mod part_repository;
pub mod payment_repository;
pub mod repair_repository;
pub mod report_repository;
pub mod service_repository;
pub mod setting_repository;
pub mod vehicle_repository;
