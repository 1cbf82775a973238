//! Repair order assembly and inventory ledger flows: stock-guarded detail
//! consumption, total recomputation, and stock restoration on deletion.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_repair_consumes_stock_and_computes_totals() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;
    let part_id = seed_part(&app, "Lốp xe", 400_000, 5).await;
    let service_id = seed_service(&app, "Thay lốp", 100_000).await;

    let (status, body) = post_json(
        &app,
        "/api/repairs",
        json!({
            "vehicleId": "51A-1234",
            "notes": "Thay lốp trước",
            "repairDetails": [
                { "serviceId": service_id },
                { "partId": part_id, "quantity": 3 }
            ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    // total == labor + parts, each the sum over the detail rows
    assert_eq!(body["data"]["laborCost"], 100_000);
    assert_eq!(body["data"]["partsCost"], 3 * 400_000);
    assert_eq!(body["data"]["totalCost"], 100_000 + 3 * 400_000);
    assert_eq!(body["data"]["details"].as_array().unwrap().len(), 2);

    // part stock 5 - 3 = 2
    let (_, body) = get(&app, &format!("/api/parts/{}", part_id)).await;
    assert_eq!(body["data"]["stock"], 2);
}

#[tokio::test]
async fn test_repair_detail_captures_price_at_time_of_use() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;
    let part_id = seed_part(&app, "Lốp xe", 400_000, 5).await;

    let (_, body) = post_json(
        &app,
        "/api/repairs",
        json!({
            "vehicleId": "51A-1234",
            "repairDetails": [ { "partId": part_id, "quantity": 1 } ]
        }),
    )
    .await;
    let repair_id = body["data"]["id"].as_i64().unwrap();

    // A later catalog price change must not affect the stored line
    let (status, _) = put_json(
        &app,
        &format!("/api/parts/{}", part_id),
        json!({ "price": 999_000 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/api/repairs/{}", repair_id)).await;
    assert_eq!(body["data"]["details"][0]["unitPrice"], 400_000);
    assert_eq!(body["data"]["totalCost"], 400_000);
}

#[tokio::test]
async fn test_repair_insufficient_stock_rolls_back() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;
    let part_id = seed_part(&app, "Lốp xe", 400_000, 5).await;

    let (status, body) = post_json(
        &app,
        "/api/repairs",
        json!({
            "vehicleId": "51A-1234",
            "repairDetails": [ { "partId": part_id, "quantity": 10 } ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INSUFFICIENT_STOCK");
    assert_eq!(body["details"]["requested"], 10);
    assert_eq!(body["details"]["available"], 5);

    // Stock untouched, no orphaned header
    let (_, body) = get(&app, &format!("/api/parts/{}", part_id)).await;
    assert_eq!(body["data"]["stock"], 5);
    let (_, body) = get(&app, "/api/repairs").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_repair_detail_must_be_service_xor_part() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;
    let part_id = seed_part(&app, "Lốp xe", 400_000, 5).await;
    let service_id = seed_service(&app, "Thay lốp", 100_000).await;

    let (status, body) = post_json(
        &app,
        "/api/repairs",
        json!({
            "vehicleId": "51A-1234",
            "repairDetails": [ { "serviceId": service_id, "partId": part_id, "quantity": 1 } ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");

    let (status, _) = post_json(
        &app,
        "/api/repairs",
        json!({ "vehicleId": "51A-1234", "repairDetails": [ {} ] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_repair_for_unknown_vehicle() {
    let app = test_app().await;
    let (status, _) = post_json(
        &app,
        "/api/repairs",
        json!({ "vehicleId": "99Z-9999", "repairDetails": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repair_with_no_details_has_zero_totals() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;

    let (status, body) = post_json(
        &app,
        "/api/repairs",
        json!({ "vehicleId": "51A-1234", "repairDetails": [] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["laborCost"], 0);
    assert_eq!(body["data"]["partsCost"], 0);
    assert_eq!(body["data"]["totalCost"], 0);
}

#[tokio::test]
async fn test_repair_delete_restores_stock() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;
    let part_id = seed_part(&app, "Lốp xe", 400_000, 5).await;

    let (_, body) = post_json(
        &app,
        "/api/repairs",
        json!({
            "vehicleId": "51A-1234",
            "repairDetails": [ { "partId": part_id, "quantity": 3 } ]
        }),
    )
    .await;
    let repair_id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = get(&app, &format!("/api/parts/{}", part_id)).await;
    assert_eq!(body["data"]["stock"], 2);

    let (status, _) = delete(&app, &format!("/api/repairs/{}", repair_id)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/api/parts/{}", part_id)).await;
    assert_eq!(body["data"]["stock"], 5);
    let (status, _) = get(&app, &format!("/api/repairs/{}", repair_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_import_increases_stock() {
    let app = test_app().await;
    let part_id = seed_part(&app, "Lốp xe", 400_000, 2).await;

    let (status, body) = post_json(
        &app,
        "/api/imports",
        json!({ "partId": part_id, "quantity": 8, "note": "nhập kho đầu tháng" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["quantity"], 8);

    let (_, body) = get(&app, &format!("/api/parts/{}", part_id)).await;
    assert_eq!(body["data"]["stock"], 10);
}

#[tokio::test]
async fn test_import_for_unknown_part() {
    let app = test_app().await;
    let (status, _) = post_json(
        &app,
        "/api/imports",
        json!({ "partId": 123, "quantity": 8 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_import_delete_restores_stock() {
    let app = test_app().await;
    let part_id = seed_part(&app, "Lốp xe", 400_000, 0).await;

    let (_, body) = post_json(
        &app,
        "/api/imports",
        json!({ "partId": part_id, "quantity": 5 }),
    )
    .await;
    let import_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = delete(&app, &format!("/api/imports/{}", import_id)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, &format!("/api/parts/{}", part_id)).await;
    assert_eq!(body["data"]["stock"], 0);
}

#[tokio::test]
async fn test_import_delete_cannot_drive_stock_negative() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;
    let part_id = seed_part(&app, "Lốp xe", 400_000, 0).await;

    let (_, body) = post_json(
        &app,
        "/api/imports",
        json!({ "partId": part_id, "quantity": 5 }),
    )
    .await;
    let import_id = body["data"]["id"].as_i64().unwrap();

    // Consume part of the imported stock
    let (status, _) = post_json(
        &app,
        "/api/repairs",
        json!({
            "vehicleId": "51A-1234",
            "repairDetails": [ { "partId": part_id, "quantity": 3 } ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Reversing the full import would need 5 but only 2 remain
    let (status, body) = delete(&app, &format!("/api/imports/{}", import_id)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "INSUFFICIENT_STOCK");

    // Ledger row and stock unchanged
    let (_, body) = get(&app, &format!("/api/parts/{}", part_id)).await;
    assert_eq!(body["data"]["stock"], 2);
    let (_, body) = get(&app, "/api/imports").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_part_referenced_by_repair_cannot_be_deleted() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;
    let part_id = seed_part(&app, "Lốp xe", 400_000, 5).await;

    let (_, _) = post_json(
        &app,
        "/api/repairs",
        json!({
            "vehicleId": "51A-1234",
            "repairDetails": [ { "partId": part_id, "quantity": 1 } ]
        }),
    )
    .await;

    let (status, body) = delete(&app, &format!("/api/parts/{}", part_id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_duplicate_part_name_conflict() {
    let app = test_app().await;
    seed_part(&app, "Lốp xe", 400_000, 5).await;

    let (status, body) = post_json(
        &app,
        "/api/parts",
        json!({ "name": "Lốp xe", "price": 100, "stock": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}
