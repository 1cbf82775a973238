//! Business logic layer
//!
//! One controller per resource. Controllers validate requests, enforce the
//! admission limits and inventory invariants, and run every multi-statement
//! sequence inside a single transaction.

pub mod account_controller;
pub mod auth_controller;
pub mod customer_controller;
pub mod import_controller;
pub mod part_controller;
pub mod payment_controller;
pub mod repair_controller;
pub mod report_controller;
pub mod service_controller;
pub mod setting_controller;
pub mod vehicle_controller;
