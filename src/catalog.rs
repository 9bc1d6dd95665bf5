//! The authoritative collection of sellable products.
//!
//! Mutations on an identifier that matches nothing are silent no-ops. The
//! returned `Option` only tells the caller whether anything happened.

use crate::models::{NewProduct, Product, ProductId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a catalog from a snapshot, keeping its order. A repeated
    /// identifier keeps only its first record.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            if catalog.position(product.id).is_some() {
                tracing::warn!(product_id = product.id, "dropping duplicate product");
                continue;
            }
            catalog.products.push(product);
        }
        catalog
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// One more than the largest identifier in use, or 1 when empty.
    /// `None` once the largest identifier is `u64::MAX`.
    pub fn next_id(&self) -> Option<ProductId> {
        match self.products.iter().map(|p| p.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    /// Appends a product under the next identifier. Returns `None`, leaving
    /// the catalog untouched, when no identifier is left.
    pub fn add_product(&mut self, fields: NewProduct) -> Option<&Product> {
        let Some(id) = self.next_id() else {
            tracing::warn!("add skipped, product ids exhausted");
            return None;
        };
        self.products.push(fields.into_product(id));
        tracing::info!(product_id = id, "product added");
        self.products.last()
    }

    pub fn update_product(&mut self, id: ProductId, fields: NewProduct) -> Option<&Product> {
        let Some(index) = self.position(id) else {
            tracing::debug!(product_id = id, "update skipped, product not found");
            return None;
        };
        self.products[index] = fields.into_product(id);
        tracing::info!(product_id = id, "product updated");
        Some(&self.products[index])
    }

    pub fn delete_product(&mut self, id: ProductId) -> Option<Product> {
        let Some(index) = self.position(id) else {
            tracing::debug!(product_id = id, "delete skipped, product not found");
            return None;
        };
        let removed = self.products.remove(index);
        tracing::info!(product_id = id, "product deleted");
        Some(removed)
    }

    pub fn get_product_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}
