//! Test helpers: an app instance over a fresh in-memory database plus
//! small request wrappers around `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use garage_management::config::database::DatabaseConfig;
use garage_management::config::environment::EnvironmentConfig;
use garage_management::database;
use garage_management::routes::create_router;
use garage_management::state::AppState;

/// Build the full router over a fresh in-memory database
pub async fn test_app() -> Router {
    let pool = DatabaseConfig::create_test_pool()
        .await
        .expect("test pool");
    database::init_schema(&pool).await.expect("schema");
    database::seed_defaults(&pool).await.expect("seed");
    create_router(AppState::new(pool, EnvironmentConfig::default()))
}

pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, Method::POST, uri, Some(body), None).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, Method::PUT, uri, Some(body), None).await
}

pub async fn patch_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, Method::PATCH, uri, Some(body), None).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, Method::DELETE, uri, None, None).await
}

/// Create a customer and return its id
pub async fn seed_customer(app: &Router, name: &str) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/customers",
        json!({ "name": name, "phone": "0900000000" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed customer: {}", body);
    body["data"]["id"].as_i64().expect("customer id")
}

/// Receive a vehicle for a customer and return its plate
pub async fn seed_vehicle(app: &Router, plate: &str, brand: &str, customer_id: i64) -> String {
    let (status, body) = post_json(
        app,
        "/api/vehicles",
        json!({ "BienSo": plate, "TenHieuXe": brand, "MaKH": customer_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed vehicle: {}", body);
    body["data"]["BienSo"].as_str().expect("plate").to_string()
}

/// Create a part and return its id
pub async fn seed_part(app: &Router, name: &str, price: i64, stock: i64) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/parts",
        json!({ "name": name, "price": price, "stock": stock }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed part: {}", body);
    body["data"]["id"].as_i64().expect("part id")
}

/// Create a service and return its id
pub async fn seed_service(app: &Router, name: &str, price: i64) -> i64 {
    let (status, body) = post_json(
        app,
        "/api/services",
        json!({ "name": name, "price": price }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "seed service: {}", body);
    body["data"]["id"].as_i64().expect("service id")
}

/// Today's server-local date as `YYYY-MM-DD`, for report ranges
pub fn today() -> String {
    chrono::Local::now().date_naive().to_string()
}
