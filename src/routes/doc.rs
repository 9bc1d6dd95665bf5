use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{CartSummary, CartView},
        home::{HomeView, ViewLink},
        products::ProductList,
    },
    models::{CartItem, NewProduct, Product},
    response::{ApiResponse, Meta},
    routes::{admin, cart, health, home, products},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        home::home,
        products::list_products,
        products::get_product,
        admin::admin_products,
        admin::create_product,
        admin::update_product,
        admin::delete_product,
        cart::cart_view,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::clear_cart
    ),
    components(
        schemas(
            Product,
            NewProduct,
            CartItem,
            CartSummary,
            CartView,
            HomeView,
            ViewLink,
            ProductList,
            health::HealthData,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartView>,
            ApiResponse<HomeView>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Home", description = "Landing view"),
        (name = "Products", description = "Product listing"),
        (name = "Admin", description = "Product management"),
        (name = "Cart", description = "Shopping cart"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
