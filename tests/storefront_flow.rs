use std::sync::Arc;

use axum::{
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use coffee_storefront::{
    config::normalize_base_path,
    error::AppError,
    models::NewProduct,
    routes::create_app,
    services::{cart_service, product_service},
    shop::Shop,
    state::AppState,
    storage::{JsonFileRepository, MemoryRepository, StateRepository},
};
use serde_json::Value;
use tower::ServiceExt;

fn sample_state(base_path: &str) -> AppState {
    AppState::new(Shop::sample(), Arc::new(MemoryRepository::new()), base_path)
}

async fn call(state: &AppState, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .expect("request");

    let response = create_app(state.clone())
        .oneshot(request)
        .await
        .expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

// Admin adds a product, shopper buys it, admin deletes it, cart keeps its line.
#[tokio::test]
async fn admin_and_cart_services_flow() -> anyhow::Result<()> {
    let state = sample_state("/");

    let created = product_service::create_product(
        &state,
        NewProduct {
            name: "Flat White".into(),
            price: 35,
            description: "Velvety".into(),
            stock: 12,
            image: "https://via.placeholder.com/150".into(),
        },
    )
    .await?
    .data
    .expect("created product");
    assert_eq!(created.id, 5);

    cart_service::add_to_cart(&state, created.id).await?;
    let view = cart_service::add_to_cart(&state, created.id)
        .await?
        .data
        .expect("cart view");
    assert_eq!(view.summary.total_quantity, 2);
    assert_eq!(view.summary.total_price, 70);

    let deleted = product_service::delete_product(&state, created.id).await?;
    assert_eq!(deleted.message, "Deleted");

    let view = cart_service::view_cart(&state).await?.data.expect("cart view");
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].name, "Flat White");
    assert_eq!(view.items[0].price, 35);

    let unknown = cart_service::add_to_cart(&state, created.id).await?;
    assert_eq!(unknown.message, "Unchanged");
    assert_eq!(unknown.data.expect("cart view").summary.total_quantity, 2);

    let missing = product_service::update_product(
        &state,
        created.id,
        NewProduct {
            name: "Ghost".into(),
            price: 1,
            description: String::new(),
            stock: 0,
            image: String::new(),
        },
    )
    .await?;
    assert_eq!(missing.message, "Unchanged");
    assert!(missing.data.is_none());

    state.checkpoint().await?;
    let cart = state.repo.load_cart()?.expect("saved cart");
    assert_eq!(cart.len(), 1);
    Ok(())
}

#[tokio::test]
async fn cart_routes_add_remove_and_clear() {
    let state = sample_state("/");

    call(&state, Method::POST, "/cart/items/1", None).await;
    let (status, body) = call(&state, Method::POST, "/cart/items/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Added to cart");

    let (_, body) = call(&state, Method::GET, "/cart", None).await;
    assert_eq!(body["data"]["items"][0]["quantity"], 2);
    assert_eq!(body["data"]["item_count"], 1);
    assert_eq!(body["data"]["total_price"], 20);

    let (_, body) = call(&state, Method::DELETE, "/cart/items/1", None).await;
    assert_eq!(body["data"]["items"][0]["quantity"], 1);

    let (_, body) = call(&state, Method::DELETE, "/cart/items/1", None).await;
    assert_eq!(body["data"]["items"], serde_json::json!([]));

    let (_, body) = call(&state, Method::DELETE, "/cart/items/1", None).await;
    assert_eq!(body["message"], "Unchanged");

    call(&state, Method::POST, "/cart/items/3", None).await;
    let (_, body) = call(&state, Method::DELETE, "/cart", None).await;
    assert_eq!(body["data"]["item_count"], 0);
    assert_eq!(body["data"]["total_quantity"], 0);
    assert_eq!(body["data"]["total_price"], 0);
}

#[tokio::test]
async fn product_lookup_miss_is_not_found() {
    let state = sample_state("/");

    let (status, body) = call(&state, Method::GET, "/products/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Cappuccino");

    let (status, body) = call(&state, Method::GET, "/products/77", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn admin_routes_manage_the_catalog() {
    let state = sample_state("/");
    let payload = serde_json::json!({
        "name": "Ristretto",
        "price": 15,
        "description": "Short",
        "stock": 3,
        "image": "https://via.placeholder.com/150"
    });

    let (status, body) = call(&state, Method::POST, "/admin/products", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 5);

    let (_, body) = call(&state, Method::PUT, "/admin/products/42", Some(payload)).await;
    assert_eq!(body["message"], "Unchanged");

    let (_, body) = call(&state, Method::DELETE, "/admin/products/1", None).await;
    assert_eq!(body["message"], "Deleted");

    let (_, body) = call(&state, Method::GET, "/admin", None).await;
    assert_eq!(body["meta"]["total"], 4);
    assert_eq!(body["data"][0]["name"], "Cappuccino");
}

#[tokio::test]
async fn views_mount_under_base_path() {
    let base = normalize_base_path("shop/");
    assert_eq!(base, "/shop");
    let state = sample_state(&base);

    let (status, body) = call(&state, Method::GET, "/shop", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["product_count"], 4);
    assert_eq!(body["data"]["links"][2]["href"], "/shop/cart");

    let (status, _) = call(&state, Method::GET, "/shop/products", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&state, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/products");
}

#[tokio::test]
async fn malformed_product_bodies_answer_with_the_envelope() {
    let state = sample_state("/");

    let (status, body) = call(
        &state,
        Method::POST,
        "/admin/products",
        Some(serde_json::json!({ "name": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().is_some_and(|m| m.starts_with("Bad Request")));
    assert!(body["data"]["error"].is_string());
    assert!(body["meta"].is_object());

    let (status, body) = call(
        &state,
        Method::PUT,
        "/admin/products/1",
        Some(serde_json::json!({ "price": "cheap" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["data"]["error"].is_string());

    let (_, body) = call(&state, Method::GET, "/products/1", None).await;
    assert_eq!(body["data"]["name"], "Americano");
}

#[tokio::test]
async fn admin_no_ops_carry_no_data() {
    let state = sample_state("/");

    let (status, body) = call(&state, Method::DELETE, "/admin/products/42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Unchanged");
    assert!(body["data"].is_null());

    let (_, body) = call(&state, Method::GET, "/admin", None).await;
    assert_eq!(body["meta"]["total"], 4);
}

#[tokio::test]
async fn failed_checkpoint_reports_storage_error_and_releases_the_shop() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "occupied")?;
    let state = AppState::new(Shop::sample(), Arc::new(JsonFileRepository::new(&blocker)), "/");

    let err = state.checkpoint().await.expect_err("root is a file");
    assert!(matches!(err, AppError::Storage(_)));
    assert!(state.shop.try_lock().is_ok());
    Ok(())
}
