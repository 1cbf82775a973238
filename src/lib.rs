//! Garage management backend
//!
//! A small auto-repair-shop management service: CRUD REST endpoints for
//! customers, vehicles, repair orders, parts inventory, services, payments,
//! imports, accounts, settings and reports, backed by SQLite.

pub mod config;
pub mod controllers;
pub mod database;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
