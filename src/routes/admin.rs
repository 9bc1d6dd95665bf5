use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};

use crate::{
    dto::products::ProductList,
    error::AppResult,
    extract::AppJson,
    models::{NewProduct, Product, ProductId},
    response::ApiResponse,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin_products))
        .route("/products", post(create_product))
        .route("/products/{id}", put(update_product).delete(delete_product))
}

#[utoipa::path(
    get,
    path = "/admin",
    responses(
        (status = 200, description = "Products under management", body = ApiResponse<ProductList>)
    ),
    tag = "Admin"
)]
pub async fn admin_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_products(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/admin/products",
    request_body = NewProduct,
    responses(
        (status = 200, description = "Create product", body = ApiResponse<Product>),
        (status = 400, description = "Malformed product body"),
    ),
    tag = "Admin"
)]
pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewProduct>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::create_product(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/admin/products/{id}",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    request_body = NewProduct,
    responses(
        (status = 200, description = "Updated product, or `Unchanged` with no data when the id matches nothing", body = ApiResponse<Product>),
        (status = 400, description = "Malformed product body"),
    ),
    tag = "Admin"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    AppJson(payload): AppJson<NewProduct>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::update_product(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/admin/products/{id}",
    params(
        ("id" = u64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Deleted product, or `Unchanged` with no data when the id matches nothing", body = ApiResponse<Product>)
    ),
    tag = "Admin"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let resp = product_service::delete_product(&state, id).await?;
    Ok(Json(resp))
}
