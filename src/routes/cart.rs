use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::cart::CartView,
    error::AppResult,
    models::ProductId,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_view).delete(clear_cart))
        .route("/items/{product_id}", post(add_to_cart).delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/cart",
    responses(
        (status = 200, description = "Cart lines and totals", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn cart_view(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::view_cart(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/cart/items/{product_id}",
    params(
        ("product_id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Add one unit; unknown products leave the cart unchanged", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::add_to_cart(&state, product_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/cart/items/{product_id}",
    params(
        ("product_id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Remove one unit", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::remove_from_cart(&state, product_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/cart",
    responses(
        (status = 200, description = "Empty the cart", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn clear_cart(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartView>>> {
    let resp = cart_service::clear_cart(&state).await?;
    Ok(Json(resp))
}
