//! HTTP API tests: drive the router in-process with `tower::ServiceExt`.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use storefront::Session;
use storefront::catalog::CatalogStore;
use storefront::config::{ServerConfig, StoreConfig};
use storefront::server::{AppState, router};

const CATALOG: &str = r#"{"categories": [
    {"id": "drinks", "name": "Drinks", "products": [
        {"id": "p1", "name": "Latte", "price": 4.0, "image": "☕",
         "addons": [{"id": "a1", "name": "Extra Shot", "price": 1.0}]},
        {"id": "p2", "name": "Mocha", "price": 4.5, "image": "🍫"}
    ]},
    {"id": "food", "name": "Food", "products": [
        {"id": "p3", "name": "Bagel", "price": 2.5}
    ]}
]}"#;

fn app() -> Router {
    let catalog = Arc::new(CatalogStore::from_json(CATALOG).unwrap());
    let config = ServerConfig {
        listen_addr: "127.0.0.1:0".into(),
        store: StoreConfig::default(),
    };
    router(Arc::new(AppState::new(config, Session::new(catalog))))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn categories_and_default_selection() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected"], "drinks");
    assert_eq!(body["categories"][1]["id"], "food");
    assert_eq!(body["categories"][0]["product_count"], 2);
}

#[tokio::test]
async fn view_update_filters_and_sorts() {
    let app = app();
    let (_, body) = send(
        &app,
        Method::PUT,
        "/api/view",
        Some(json!({"sort": "price-desc"})),
    )
    .await;
    assert_eq!(body["sort"], "price-desc");
    assert_eq!(body["products"][0]["name"], "Mocha");
    assert_eq!(body["products"][1]["name"], "Latte");

    let (_, body) = send(&app, Method::PUT, "/api/view", Some(json!({"search": "LAT"}))).await;
    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["id"], "p1");

    // unrecognized sort keys keep the filtered order
    let (_, body) = send(
        &app,
        Method::PUT,
        "/api/view",
        Some(json!({"search": "", "sort": "sideways"})),
    )
    .await;
    assert_eq!(body["sort"], "none");
    assert_eq!(body["products"][0]["name"], "Latte");
}

#[tokio::test]
async fn latte_scenario_over_http() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart/items",
        Some(json!({"product_id": "p1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lines"].as_array().unwrap().len(), 1);
    assert_eq!(body["totals"]["subtotal"], 4.0);

    let (_, body) = send(
        &app,
        Method::PUT,
        "/api/cart/items/0/addons/a1",
        Some(json!({"quantity": 2})),
    )
    .await;
    assert_eq!(body["totals"]["subtotal"], 6.0);

    send(&app, Method::POST, "/api/discount/toggle", None).await;
    let (_, body) = send(&app, Method::PUT, "/api/discount", Some(json!({"value": 10}))).await;
    assert_eq!(body["totals"]["discount"], 6.0);
    assert_eq!(body["totals"]["grand_total"], 0.0);

    let (_, body) = send(
        &app,
        Method::PUT,
        "/api/discount",
        Some(json!({"kind": "percentage", "value": "50"})),
    )
    .await;
    assert_eq!(body["discount"]["kind"], "percentage");
    assert_eq!(body["totals"]["discount"], 3.0);
    assert_eq!(body["totals"]["grand_total"], 3.0);

    let (_, products) = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(products["products"][0]["in_cart"], true);
    assert_eq!(products["products"][1]["in_cart"], false);
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/cart/items",
        Some(json!({"product_id": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cart_edits_degrade_to_noops() {
    let app = app();
    for id in ["p1", "p2"] {
        send(&app, Method::POST, "/api/cart/items", Some(json!({"product_id": id}))).await;
    }

    let (status, body) = send(&app, Method::DELETE, "/api/cart/items/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lines"].as_array().unwrap().len(), 2);

    let (status, body) = send(&app, Method::DELETE, "/api/cart/items/-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lines"].as_array().unwrap().len(), 2);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/cart/items/-2/quantity",
        Some(json!({"quantity": 5})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totals"]["item_count"], 2);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/cart/items/-1/addons/a1",
        Some(json!({"quantity": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        &app,
        Method::PUT,
        "/api/cart/items/0/quantity",
        Some(json!({"quantity": "abc"})),
    )
    .await;
    assert_eq!(body["lines"][0]["quantity"], 1);

    let (_, body) = send(
        &app,
        Method::PUT,
        "/api/cart/items/1/quantity",
        Some(json!({"quantity": -4})),
    )
    .await;
    assert_eq!(body["lines"][1]["quantity"], 1);

    let (_, body) = send(
        &app,
        Method::PUT,
        "/api/cart/items/0/quantity",
        Some(json!({"quantity": 3})),
    )
    .await;
    assert_eq!(body["totals"]["item_count"], 4);

    let (_, body) = send(
        &app,
        Method::PUT,
        "/api/cart/items/0/addons/zzz",
        Some(json!({"quantity": 1})),
    )
    .await;
    assert!(body["lines"][0]["selected_addons"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn remove_product_and_clear() {
    let app = app();
    for id in ["p1", "p2", "p1"] {
        send(&app, Method::POST, "/api/cart/items", Some(json!({"product_id": id}))).await;
    }

    let (_, body) = send(&app, Method::DELETE, "/api/cart/products/p1", None).await;
    let lines = body["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["id"], "p2");

    let (_, body) = send(&app, Method::DELETE, "/api/cart", None).await;
    assert!(body["lines"].as_array().unwrap().is_empty());
    assert_eq!(body["totals"]["subtotal"], 0.0);
}

#[tokio::test]
async fn receipt_is_plain_text() {
    let app = app();
    send(&app, Method::POST, "/api/cart/items", Some(json!({"product_id": "p2"}))).await;

    let request = Request::builder()
        .uri("/api/receipt")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("Mocha x1"));
    assert!(text.contains("TOTAL:  4.50"));
}
