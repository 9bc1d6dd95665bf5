use crate::{catalog::ProductCatalog, models::Product};

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// The catalog a fresh storefront starts with.
pub fn sample_products() -> Vec<Product> {
    [
        (1, "Americano", 10, 10),
        (2, "Cappuccino", 20, 20),
        (3, "Espresso", 30, 30),
        (4, "Latte", 40, 40),
    ]
    .into_iter()
    .map(|(id, name, price, stock)| Product {
        id,
        name: name.to_string(),
        price,
        description: format!("Description {id}"),
        stock,
        image: PLACEHOLDER_IMAGE.to_string(),
    })
    .collect()
}

pub fn sample_catalog() -> ProductCatalog {
    ProductCatalog::from_products(sample_products())
}
