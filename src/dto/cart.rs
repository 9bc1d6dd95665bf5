use serde::Serialize;
use utoipa::ToSchema;

use crate::{cart::Cart, models::CartItem};

/// Aggregates recomputed from the current cart lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CartSummary {
    pub item_count: usize,
    pub total_quantity: u64,
    pub total_price: i64,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        Self {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_price: cart.total_price(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CartView {
    pub items: Vec<CartItem>,
    #[serde(flatten)]
    pub summary: CartSummary,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            summary: CartSummary::from(cart),
        }
    }
}
