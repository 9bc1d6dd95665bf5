use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod admin;
pub mod cart;
pub mod doc;
pub mod health;
pub mod home;
pub mod products;

/// The four storefront views, without state or base path applied.
pub fn create_view_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/products", products::router())
        .nest("/admin", admin::router())
        .nest("/cart", cart::router())
}

/// Views mounted under the state's base path, plus health and docs.
pub fn create_app(state: AppState) -> Router {
    let views = if state.base_path == "/" {
        create_view_router()
    } else {
        Router::new().nest(&state.base_path, create_view_router())
    };

    views
        .route("/health", get(health::health_check))
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
