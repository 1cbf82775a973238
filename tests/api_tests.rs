mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
}

#[tokio::test]
async fn test_customer_create_then_get_round_trip() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/customers",
        json!({ "name": "A", "phone": "0900000000" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    let id = body["data"]["id"].as_i64().expect("new integer id");

    let (status, body) = get(&app, &format!("/api/customers/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "A");
    assert_eq!(body["data"]["phone"], "0900000000");
    assert_eq!(body["data"]["debt"], 0);
}

#[tokio::test]
async fn test_customer_invalid_phone_rejected() {
    let app = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/customers",
        json!({ "name": "A", "phone": "123" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_customer_not_found() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/customers/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_customer_search_filters_by_name() {
    let app = test_app().await;
    seed_customer(&app, "Nguyen Van An").await;
    seed_customer(&app, "Le Thi Hoa").await;

    let (status, body) = get(&app, "/api/customers?search=An").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Nguyen Van An");
}

#[tokio::test]
async fn test_customer_update_and_delete() {
    let app = test_app().await;
    let id = seed_customer(&app, "A").await;

    let (status, body) = put_json(
        &app,
        &format!("/api/customers/{}", id),
        json!({ "name": "A updated" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "A updated");
    assert_eq!(body["data"]["phone"], "0900000000");

    let (status, _) = delete(&app, &format!("/api/customers/{}", id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, &format!("/api/customers/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_customer_with_vehicles_cannot_be_deleted() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;

    let (status, body) = delete(&app, &format!("/api/customers/{}", customer_id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_vehicle_intake_creates_brand() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;

    let (status, body) = post_json(
        &app,
        "/api/vehicles",
        json!({ "BienSo": "51A-1234", "TenHieuXe": "Toyota", "MaKH": customer_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["BienSo"], "51A-1234");
    assert_eq!(body["data"]["TenHieuXe"], "Toyota");
    assert_eq!(body["data"]["TinhTrang"], "waiting");

    let (status, body) = get(&app, "/api/brands").await;
    assert_eq!(status, StatusCode::OK);
    let brands = body["data"].as_array().unwrap();
    assert_eq!(brands.len(), 1);
    assert_eq!(brands[0]["name"], "Toyota");

    // Second vehicle with the same brand reuses the row
    seed_vehicle(&app, "51A-5678", "Toyota", customer_id).await;
    let (_, body) = get(&app, "/api/brands").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_vehicle_duplicate_plate_conflict() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;

    let (status, body) = post_json(
        &app,
        "/api/vehicles",
        json!({ "BienSo": "51A-1234", "TenHieuXe": "Honda", "MaKH": customer_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Biển số xe đã tồn tại");
}

#[tokio::test]
async fn test_vehicle_intake_unknown_customer() {
    let app = test_app().await;
    let (status, body) = post_json(
        &app,
        "/api/vehicles",
        json!({ "BienSo": "51A-1234", "TenHieuXe": "Toyota", "MaKH": 42 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_vehicle_status_update() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;

    let (status, body) = patch_json(
        &app,
        "/api/vehicles/51A-1234/status",
        json!({ "status": "repairing" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["TinhTrang"], "repairing");

    let (status, body) = patch_json(
        &app,
        "/api/vehicles/51A-1234/status",
        json!({ "status": "totaled" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_vehicle_list_filtered_by_customer() {
    let app = test_app().await;
    let first = seed_customer(&app, "A").await;
    let second = seed_customer(&app, "B").await;
    seed_vehicle(&app, "51A-1111", "Toyota", first).await;
    seed_vehicle(&app, "51A-2222", "Honda", second).await;

    let (status, body) = get(&app, &format!("/api/vehicles?customerId={}", second)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["BienSo"], "51A-2222");
}

#[tokio::test]
async fn test_login_and_account_management() {
    let app = test_app().await;

    // Seeded main admin
    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": "admin", "password": "admin123" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["token"].as_str().expect("token").to_string();
    assert_eq!(body["data"]["account"]["role"], "admin");

    // No token -> 401
    let (status, _) = get(&app, "/api/accounts").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Admin token -> account list
    let (status, body) =
        request(&app, Method::GET, "/api/accounts", None, Some(token.as_str())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    // Create a staff account
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/accounts",
        Some(json!({
            "displayName": "Nhan vien",
            "username": "staff1",
            "password": "secret1",
            "role": "staff"
        })),
        Some(token.as_str()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let staff_id = body["data"]["id"].as_i64().unwrap();

    // Duplicate username -> 409
    let (status, _) = request(
        &app,
        Method::POST,
        "/api/accounts",
        Some(json!({
            "displayName": "Nhan vien 2",
            "username": "staff1",
            "password": "secret2",
            "role": "staff"
        })),
        Some(token.as_str()),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Staff accounts cannot manage accounts
    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": "staff1", "password": "secret1" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let staff_token = body["data"]["token"].as_str().unwrap().to_string();
    let (status, _) =
        request(&app, Method::GET, "/api/accounts", None, Some(staff_token.as_str())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The main admin is protected from deletion
    let (status, _) =
        request(&app, Method::DELETE, "/api/accounts/1", None, Some(token.as_str())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Other accounts can be deleted
    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/accounts/{}", staff_id),
        None,
        Some(token.as_str()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = test_app().await;
    let (status, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": "admin", "password": "wrong" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_locked_account_cannot_login() {
    let app = test_app().await;
    let (_, body) = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": "admin", "password": "admin123" }),
    )
    .await;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/accounts",
        Some(json!({
            "displayName": "Nhan vien",
            "username": "staff1",
            "password": "secret1",
            "role": "staff"
        })),
        Some(token.as_str()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let staff_id = body["data"]["id"].as_i64().unwrap();

    let (status, _) = request(
        &app,
        Method::PUT,
        &format!("/api/accounts/{}", staff_id),
        Some(json!({ "status": "locked" })),
        Some(token.as_str()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post_json(
        &app,
        "/api/auth/login",
        json!({ "username": "staff1", "password": "secret1" }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_payment_reduces_derived_debt() {
    let app = test_app().await;
    let customer_id = seed_customer(&app, "A").await;
    seed_vehicle(&app, "51A-1234", "Toyota", customer_id).await;
    let service_id = seed_service(&app, "Thay nhớt", 150_000).await;

    let (status, _) = post_json(
        &app,
        "/api/repairs",
        json!({
            "vehicleId": "51A-1234",
            "repairDetails": [ { "serviceId": service_id } ]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, &format!("/api/customers/{}", customer_id)).await;
    assert_eq!(body["data"]["debt"], 150_000);

    let (status, body) = post_json(
        &app,
        "/api/payments",
        json!({ "customerId": customer_id, "amount": 100_000, "note": "tra truoc" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["amount"], 100_000);

    let (_, body) = get(&app, &format!("/api/customers/{}", customer_id)).await;
    assert_eq!(body["data"]["debt"], 50_000);
}

#[tokio::test]
async fn test_payment_for_unknown_customer() {
    let app = test_app().await;
    let (status, _) = post_json(
        &app,
        "/api/payments",
        json!({ "customerId": 77, "amount": 1000 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
