//! API integration tests.
//!
//! Most tests drive the real router in-process with a fresh state per test,
//! so no server or shared fixture is needed. The `#[ignore]`d tests at the
//! bottom hit a running server instead (cargo test -- --ignored).

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use mercado_server::{config::AppConfig, create_router, services::Services, store::Store, AppState};

fn app(store: Store) -> Router {
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(store)),
    };
    create_router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

async fn post(app: &Router, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => Request::builder().method("POST").uri(uri).body(Body::empty()),
    }
    .expect("Failed to build request");
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_health_check() {
    let app = app(Store::new());

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn test_search_term_too_short() {
    let app = app(Store::new());

    let (status, body) = get(&app, "/products/search?name=a").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["detail"],
        "El término de búsqueda debe tener al menos 2 caracteres"
    );
}

#[tokio::test]
async fn test_search_inverted_price_range() {
    let app = app(Store::new());

    let (status, body) = get(&app, "/products/search?min_price=10&max_price=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "El precio mínimo no puede ser mayor al máximo");
}

#[tokio::test]
async fn test_product_crud_flow() {
    let app = app(Store::new());

    // Create
    let (status, created) = post(
        &app,
        "/products",
        Some(json!({"name": "Teclado", "price": 25.0, "quantity": 10})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    // Read
    let (status, fetched) = get(&app, "/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Teclado");

    // Partial update: only the price changes
    let request = Request::builder()
        .method("PUT")
        .uri("/products/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"price": 19.99}).to_string()))
        .expect("Failed to build request");
    let (status, updated) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 19.99);
    assert_eq!(updated["name"], "Teclado");
    assert_eq!(updated["quantity"], 10);

    // Delete returns the removed entity
    let request = Request::builder()
        .method("DELETE")
        .uri("/products/1")
        .body(Body::empty())
        .expect("Failed to build request");
    let (status, removed) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["id"], 1);

    // Gone: structured not-found body
    let (status, body) = get(&app, "/products/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error_code"], "PRODUCT_NOT_FOUND");
    assert_eq!(body["message"], "Producto con ID 1 no encontrado");
}

#[tokio::test]
async fn test_duplicate_product_rejected() {
    let app = app(Store::new());

    let product = json!({"name": "Teclado", "price": 25.0, "quantity": 10});
    let (status, _) = post(&app, "/products", Some(product.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&app, "/products", Some(product)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "DUPLICATE_PRODUCT");
    assert_eq!(body["message"], "El producto 'Teclado' ya existe");
}

#[tokio::test]
async fn test_market_search_policies() {
    let app = app(Store::seeded());

    // Name is mandatory
    let (status, body) = get(&app, "/punto-group/products/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Debes ingresar un nombre");

    // No match answers 404, not an empty list
    let (status, body) = get(&app, "/punto-group/products/search?name=kiwi").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Producto no encontrado");

    // Case-insensitive substring match
    let (status, body) = get(&app, "/punto-group/products/search?name=man").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Manzana");
}

#[tokio::test]
async fn test_market_create_and_categories() {
    let app = app(Store::seeded());

    let (status, created) = post(
        &app,
        "/punto-group/products",
        Some(json!({"name": "Uva", "price": 3.0})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 3);

    let (status, body) = get(&app, "/punto-group/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Frutas", "Verduras", "Lácteos"]));
}

#[tokio::test]
async fn test_add_book() {
    let app = app(Store::seeded());

    let (status, book) = post(
        &app,
        "/punto4/books",
        Some(json!({
            "title": "El Principito",
            "author": "Antoine de Saint-Exupéry",
            "genre": "Infantil",
            "year": 1943
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["title"], "El Principito");
    assert_eq!(book["available"], true);
    assert_eq!(book["id"], 3);
}

#[tokio::test]
async fn test_borrow_and_return_book() {
    let app = app(Store::seeded());

    let (status, book) = post(&app, "/punto4/borrowing/borrow/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["available"], false);

    // Borrowing the same book again must fail
    let (status, body) = post(&app, "/punto4/borrowing/borrow/1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Libro no disponible");

    let (status, book) = post(&app, "/punto4/borrowing/return/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(book["available"], true);

    // Returning an already-available book is idempotent
    let (status, _) = post(&app, "/punto4/borrowing/return/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_borrow_missing_book() {
    let app = app(Store::new());

    let (status, body) = post(&app, "/punto4/borrowing/borrow/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Libro no encontrado");
}

#[tokio::test]
async fn test_list_genres() {
    let app = app(Store::seeded());

    let (status, body) = get(&app, "/punto4/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Novela", "Clásico"]));
}

const BASE_URL: &str = "http://localhost:8080";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_live_health_check() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_live_list_books() {
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/punto4/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}
