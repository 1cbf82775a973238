//! Admission-limit enforcement, settings round-trips and the report
//! aggregations.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_settings_defaults() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["maxCars"], 30);
    assert_eq!(body["data"]["maxBrands"], 10);
    assert_eq!(body["data"]["maxParts"], 200);
    assert_eq!(body["data"]["maxLabors"], 100);
}

#[tokio::test]
async fn test_settings_put_then_get_round_trip() {
    let app = test_app().await;

    let (status, body) = put_json(
        &app,
        "/api/settings",
        json!({ "maxCars": 50, "maxBrands": 20, "maxParts": 300, "maxLabors": 150 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["maxCars"], 50);

    let (status, body) = get(&app, "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["maxCars"], 50);
    assert_eq!(body["data"]["maxBrands"], 20);
    assert_eq!(body["data"]["maxParts"], 300);
    assert_eq!(body["data"]["maxLabors"], 150);
}

#[tokio::test]
async fn test_settings_partial_update_keeps_other_values() {
    let app = test_app().await;

    let (_, _) = put_json(&app, "/api/settings", json!({ "maxCars": 50 })).await;
    let (_, body) = get(&app, "/api/settings").await;
    assert_eq!(body["data"]["maxCars"], 50);
    assert_eq!(body["data"]["maxBrands"], 10);
}

#[tokio::test]
async fn test_brand_limit_exceeded() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    let (_, _) = put_json(&app, "/api/settings", json!({ "maxBrands": 1 })).await;

    // First brand "Toyota" fills the catalog
    seed_vehicle(&app, "51A-1111", "Toyota", customer_id).await;

    // A vehicle with a known brand still passes
    seed_vehicle(&app, "51A-2222", "Toyota", customer_id).await;

    // A new brand is rejected and nothing is created
    let (status, body) = post_json(
        &app,
        "/api/vehicles",
        json!({ "BienSo": "51A-1", "TenHieuXe": "Honda", "MaKH": customer_id }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BRAND_LIMIT_EXCEEDED");
    assert_eq!(body["details"]["limit"], 1);
    assert_eq!(body["details"]["current"], 1);

    let (_, body) = get(&app, "/api/brands").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let (_, body) = get(&app, "/api/vehicles").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_vehicle_daily_limit_exceeded() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    let (_, _) = put_json(&app, "/api/settings", json!({ "maxCars": 1 })).await;

    seed_vehicle(&app, "51A-1111", "Toyota", customer_id).await;

    let (status, body) = post_json(
        &app,
        "/api/vehicles",
        json!({ "BienSo": "51A-2222", "TenHieuXe": "Toyota", "MaKH": customer_id }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VEHICLE_LIMIT_EXCEEDED");

    let (_, body) = get(&app, "/api/vehicles").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_part_limit_exceeded() {
    let app = test_app().await;
    let (_, _) = put_json(&app, "/api/settings", json!({ "maxParts": 1 })).await;

    seed_part(&app, "Lốp xe", 400_000, 5).await;

    let (status, body) = post_json(
        &app,
        "/api/parts",
        json!({ "name": "Ắc quy", "price": 900_000, "stock": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "PART_LIMIT_EXCEEDED");

    let (_, body) = get(&app, "/api/parts").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_service_limit_exceeded() {
    let app = test_app().await;
    let (_, _) = put_json(&app, "/api/settings", json!({ "maxLabors": 1 })).await;

    seed_service(&app, "Thay nhớt", 150_000).await;

    let (status, body) = post_json(
        &app,
        "/api/services",
        json!({ "name": "Vá lốp", "price": 50_000 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "SERVICE_LIMIT_EXCEEDED");

    let (_, body) = get(&app, "/api/services").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_limit_change_takes_effect_immediately() {
    let app = test_app().await;
    let (_, _) = put_json(&app, "/api/settings", json!({ "maxParts": 1 })).await;
    seed_part(&app, "Lốp xe", 400_000, 5).await;

    let (status, _) = post_json(
        &app,
        "/api/parts",
        json!({ "name": "Ắc quy", "price": 900_000, "stock": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Raising the limit unblocks creation without a restart
    let (_, _) = put_json(&app, "/api/settings", json!({ "maxParts": 5 })).await;
    let (status, _) = post_json(
        &app,
        "/api/parts",
        json!({ "name": "Ắc quy", "price": 900_000, "stock": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_limits_endpoint_reports_usage() {
    let app = test_app().await;
    seed_part(&app, "Lốp xe", 400_000, 5).await;

    let (status, body) = get(&app, "/api/limits").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 4);

    let parts_row = rows
        .iter()
        .find(|row| row["resource"] == "parts")
        .expect("parts row");
    assert_eq!(parts_row["current"], 1);
    assert_eq!(parts_row["limit"], 200);
}

#[tokio::test]
async fn test_revenue_report_groups_same_day_repairs() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1111", "Toyota", customer_id).await;
    seed_vehicle(&app, "51A-2222", "Toyota", customer_id).await;
    let service_id = seed_service(&app, "Thay nhớt", 150_000).await;
    let part_id = seed_part(&app, "Lốp xe", 400_000, 10).await;

    let (status, _) = post_json(
        &app,
        "/api/repairs",
        json!({
            "vehicleId": "51A-1111",
            "repairDetails": [ { "serviceId": service_id } ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = post_json(
        &app,
        "/api/repairs",
        json!({
            "vehicleId": "51A-2222",
            "repairDetails": [ { "partId": part_id, "quantity": 2 } ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let day = today();
    let (status, body) = get(
        &app,
        &format!("/api/reports/revenue?fromDate={}&toDate={}", day, day),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["CarsRepaired"], 2);
    assert_eq!(rows[0]["TotalLabor"], 150_000);
    assert_eq!(rows[0]["TotalParts"], 800_000);
    assert_eq!(rows[0]["TotalRevenue"], 950_000);
}

#[tokio::test]
async fn test_revenue_report_empty_range() {
    let app = test_app().await;
    let (status, body) = get(
        &app,
        "/api/reports/revenue?fromDate=2000-01-01&toDate=2000-01-31",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_report_rejects_bad_range() {
    let app = test_app().await;
    let (status, _) = get(
        &app,
        "/api/reports/revenue?fromDate=2024-02-01&toDate=2024-01-01",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(
        &app,
        "/api/reports/inventory?fromDate=bad&toDate=2024-01-01",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inventory_report_balances() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1111", "Toyota", customer_id).await;
    let part_id = seed_part(&app, "Lốp xe", 400_000, 2).await;

    // +8 imported, -3 consumed within the range
    let (status, _) = post_json(
        &app,
        "/api/imports",
        json!({ "partId": part_id, "quantity": 8 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = post_json(
        &app,
        "/api/repairs",
        json!({
            "vehicleId": "51A-1111",
            "repairDetails": [ { "partId": part_id, "quantity": 3 } ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let day = today();
    let (status, body) = get(
        &app,
        &format!("/api/reports/inventory?fromDate={}&toDate={}", day, day),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["partId"], part_id);
    assert_eq!(rows[0]["imported"], 8);
    assert_eq!(rows[0]["consumed"], 3);
    // ending = 2 + 8 - 3, beginning derived backwards = ending + 3 - 8
    assert_eq!(rows[0]["ending"], 7);
    assert_eq!(rows[0]["beginning"], 2);
}
