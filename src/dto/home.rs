use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::cart::CartSummary;

#[derive(Debug, Serialize, ToSchema)]
pub struct ViewLink {
    pub name: String,
    pub href: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HomeView {
    pub product_count: usize,
    pub cart: CartSummary,
    pub links: Vec<ViewLink>,
}
