use axum::{Json, extract::State};

use crate::{
    dto::{
        cart::CartSummary,
        home::{HomeView, ViewLink},
    },
    response::{ApiResponse, Meta},
    state::AppState,
};

const VIEWS: [(&str, &str); 3] = [
    ("products", "/products"),
    ("admin", "/admin"),
    ("cart", "/cart"),
];

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Storefront landing summary", body = ApiResponse<HomeView>)
    ),
    tag = "Home"
)]
pub async fn home(State(state): State<AppState>) -> Json<ApiResponse<HomeView>> {
    let shop = state.shop.lock().await;
    let links = VIEWS
        .iter()
        .map(|(name, path)| ViewLink {
            name: (*name).to_string(),
            href: state.link(path),
        })
        .collect();
    let data = HomeView {
        product_count: shop.catalog.len(),
        cart: CartSummary::from(&shop.cart),
        links,
    };

    Json(ApiResponse::success("Welcome", data, Some(Meta::empty())))
}
