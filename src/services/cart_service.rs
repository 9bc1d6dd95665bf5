use crate::{
    dto::cart::CartView,
    error::AppResult,
    models::ProductId,
    response::{ApiResponse, Meta},
    shop::Shop,
    state::AppState,
};

fn cart_response(message: &str, shop: &Shop) -> ApiResponse<CartView> {
    let view = CartView::from(&shop.cart);
    let meta = Meta::new(view.summary.item_count);
    ApiResponse::success(message, view, Some(meta))
}

pub async fn view_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    let shop = state.shop.lock().await;
    Ok(cart_response("OK", &shop))
}

pub async fn add_to_cart(
    state: &AppState,
    product_id: ProductId,
) -> AppResult<ApiResponse<CartView>> {
    let mut shop = state.shop.lock().await;
    let message = match shop.add_to_cart(product_id) {
        Some(_) => "Added to cart",
        None => "Unchanged",
    };
    Ok(cart_response(message, &shop))
}

pub async fn remove_from_cart(
    state: &AppState,
    product_id: ProductId,
) -> AppResult<ApiResponse<CartView>> {
    let mut shop = state.shop.lock().await;
    let message = match shop.cart.remove_item(product_id) {
        Some(_) => "Removed from cart",
        None => "Unchanged",
    };
    Ok(cart_response(message, &shop))
}

pub async fn clear_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    let mut shop = state.shop.lock().await;
    shop.cart.clear_cart();
    Ok(cart_response("Cart cleared", &shop))
}
