use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Product;

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

impl ProductList {
    pub fn from_slice(products: &[Product]) -> Self {
        Self {
            items: products.to_vec(),
        }
    }
}
