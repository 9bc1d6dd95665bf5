use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub type ProductId = u64;

/// A sellable product. `price` is in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(value_type = u64)]
    pub id: ProductId,
    pub name: String,
    pub price: i64,
    pub description: String,
    /// Informational only; cart operations never read or decrement it.
    pub stock: i32,
    pub image: String,
}

/// Every product field except the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewProduct {
    pub name: String,
    pub price: i64,
    pub description: String,
    pub stock: i32,
    pub image: String,
}

impl NewProduct {
    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            stock: self.stock,
            image: self.image,
        }
    }
}

/// One cart line. `name` and `price` are copied from the product when the
/// line is created and never refreshed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    #[schema(value_type = u64)]
    pub product_id: ProductId,
    pub name: String,
    pub price: i64,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.quantity))
    }
}
