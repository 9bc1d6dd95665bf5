use crate::{
    dto::products::ProductList,
    error::{AppError, AppResult},
    models::{NewProduct, Product, ProductId},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let shop = state.shop.lock().await;
    let products = shop.catalog.products();
    let meta = Meta::new(products.len());
    Ok(ApiResponse::success(
        "Products",
        ProductList::from_slice(products),
        Some(meta),
    ))
}

pub async fn get_product(state: &AppState, id: ProductId) -> AppResult<ApiResponse<Product>> {
    let shop = state.shop.lock().await;
    let product = match shop.catalog.get_product_by_id(id) {
        Some(p) => p.clone(),
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Product", product, None))
}

pub async fn create_product(
    state: &AppState,
    payload: NewProduct,
) -> AppResult<ApiResponse<Product>> {
    let mut shop = state.shop.lock().await;
    let product = match shop.catalog.add_product(payload) {
        Some(p) => p.clone(),
        None => {
            return Err(AppError::BadRequest(
                "no product id left to assign".to_string(),
            ));
        }
    };
    Ok(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: ProductId,
    payload: NewProduct,
) -> AppResult<ApiResponse<Product>> {
    let mut shop = state.shop.lock().await;
    let resp = match shop.catalog.update_product(id, payload) {
        Some(product) => ApiResponse::success("Updated", product.clone(), Some(Meta::empty())),
        None => ApiResponse::unchanged(),
    };
    Ok(resp)
}

/// Deleting a product leaves cart lines that already reference it untouched.
pub async fn delete_product(state: &AppState, id: ProductId) -> AppResult<ApiResponse<Product>> {
    let mut shop = state.shop.lock().await;
    let resp = match shop.catalog.delete_product(id) {
        Some(product) => ApiResponse::success("Deleted", product, Some(Meta::empty())),
        None => ApiResponse::unchanged(),
    };
    Ok(resp)
}
